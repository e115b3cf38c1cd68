//! Authentication: password hashing, session tokens and cookie sessions

pub mod cookie;
pub mod jwt;
pub mod middleware;
pub mod password;
pub mod session;

pub use cookie::{clear_session_cookie, read_cookie, session_cookie, ACCESS_TOKEN_COOKIE};
pub use jwt::{Claims, JwtService, TokenError};
pub use middleware::session_auth_middleware;
pub use password::PasswordHasher;
pub use session::{AuthContext, AuthRejection, SessionResolver};
