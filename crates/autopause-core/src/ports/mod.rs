//! 포트 인터페이스 (trait).
//!
//! 감지 엔진이 소비하는 OS 경계. 각 어댑터 crate가 이 trait들을 구현하며,
//! `autopause-app`에서 `Arc<dyn T>`로 와이어링한다.
//!
//! 창 탐색과 캡처는 폴링 주기 안에서 동기 호출로 끝나므로 일반 trait,
//! 입력 드라이버는 클릭 유지 시간 동안 대기하므로 `async_trait`을 사용한다.

pub mod capture;
pub mod input_driver;
pub mod window;
