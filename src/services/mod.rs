//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 상태를 갖지 않으며 리포지토리를 생성자로 주입받습니다.
//! 핸들러에는 `web::Data<UserService>`로 공유됩니다.

pub mod users;
