//! 仓库层集成测试
//!
//! 需要 PostgreSQL：设置 TEST_DATABASE_URL 后运行
//! `cargo test --test repository_tests -- --ignored`

use serial_test::serial;
use shop_admin::{
    error::AppError,
    models::{category::CategoryRequest, product::ProductRequest, user::UserRequest},
    repository::{CategoryRepository, ProductRepository, UserDirectory, UserRepository},
};

mod common;
use common::{create_test_config, setup_test_db};

fn user_request(email: &str) -> UserRequest {
    UserRequest {
        first_name: "Ana".to_string(),
        last_name: "Torres".to_string(),
        email: email.to_string(),
        password: "secreto".to_string(),
    }
}

fn product_request(category_id: i32) -> ProductRequest {
    ProductRequest {
        product_name: "Teclado".to_string(),
        description: "Mecánico".to_string(),
        price: 4500,
        category_id,
    }
}

#[tokio::test]
#[ignore] // 需要数据库
#[serial]
async fn test_user_create_and_find_by_email() {
    let pool = setup_test_db(&create_test_config()).await;
    let repo = UserRepository::new(pool);

    let created = repo
        .create(&user_request("ana@example.com"), "$argon2id$fake")
        .await
        .unwrap();

    let found = repo
        .find_by_email("ana@example.com")
        .await
        .unwrap()
        .expect("User not found");
    assert_eq!(found.user_id, created.user_id);
    assert_eq!(found.password_hash, "$argon2id$fake");

    assert!(repo.find_by_email("nadie@example.com").await.unwrap().is_none());
}

#[tokio::test]
#[ignore] // 需要数据库
#[serial]
async fn test_user_duplicate_email_conflict() {
    let pool = setup_test_db(&create_test_config()).await;
    let repo = UserRepository::new(pool);

    repo.create(&user_request("ana@example.com"), "h1").await.unwrap();
    let result = repo.create(&user_request("ana@example.com"), "h2").await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
}

#[tokio::test]
#[ignore] // 需要数据库
#[serial]
async fn test_user_update_and_delete() {
    let pool = setup_test_db(&create_test_config()).await;
    let repo = UserRepository::new(pool);

    let user = repo.create(&user_request("ana@example.com"), "h1").await.unwrap();

    let mut req = user_request("ana.torres@example.com");
    req.first_name = "Ana María".to_string();
    let updated = repo.update(user.user_id, &req, "h2").await.unwrap().unwrap();
    assert_eq!(updated.first_name, "Ana María");
    assert_eq!(updated.email, "ana.torres@example.com");

    assert!(repo.update(9999, &req, "h3").await.unwrap().is_none());

    let deleted = repo.delete(user.user_id).await.unwrap();
    assert!(deleted.is_some());
    assert!(repo.find_by_id(user.user_id).await.unwrap().is_none());
    assert!(repo.list().await.unwrap().is_empty());
}

#[tokio::test]
#[ignore] // 需要数据库
#[serial]
async fn test_products_joined_with_category() {
    let pool = setup_test_db(&create_test_config()).await;
    let categories = CategoryRepository::new(pool.clone());
    let products = ProductRepository::new(pool);

    let category = categories
        .create(&CategoryRequest {
            category_name: "Periféricos".to_string(),
        })
        .await
        .unwrap();
    let product = products.create(&product_request(category.category_id)).await.unwrap();

    let listed = products.list_with_category().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].product_id, product.product_id);
    assert_eq!(listed[0].category_name.as_deref(), Some("Periféricos"));

    let by_category = products.list_by_category(category.category_id).await.unwrap();
    assert_eq!(by_category.len(), 1);
    assert!(products.list_by_category(9999).await.unwrap().is_empty());

    // 仍有商品引用时删除被外键拒绝
    let result = categories.delete(category.category_id).await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));
}

#[tokio::test]
#[ignore] // 需要数据库
#[serial]
async fn test_product_with_unknown_category_rejected() {
    let pool = setup_test_db(&create_test_config()).await;
    let products = ProductRepository::new(pool);

    let result = products.create(&product_request(9999)).await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));
}

#[tokio::test]
#[ignore] // 需要数据库
#[serial]
async fn test_category_update_and_delete() {
    let pool = setup_test_db(&create_test_config()).await;
    let categories = CategoryRepository::new(pool);

    let category = categories
        .create(&CategoryRequest {
            category_name: "Audio".to_string(),
        })
        .await
        .unwrap();

    let updated = categories
        .update(
            category.category_id,
            &CategoryRequest {
                category_name: "Audio y video".to_string(),
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.category_name, "Audio y video");

    let deleted = categories.delete(category.category_id).await.unwrap();
    assert!(deleted.is_some());
    assert!(categories.find_by_id(category.category_id).await.unwrap().is_none());
    assert!(categories.delete(category.category_id).await.unwrap().is_none());
}
