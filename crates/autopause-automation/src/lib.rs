//! # autopause-automation
//!
//! 클릭 자동화 크레이트.
//! 언제 클릭할지 정하는 에지 트리거, 플랫폼 입력 드라이버(enigo), 클릭 후 커서를
//! 원래 위치로 되돌리는 클릭 디스패처를 제공한다.

pub mod dispatcher;
pub mod input_driver;
pub mod trigger;
