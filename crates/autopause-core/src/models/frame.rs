//! 캡처된 디스플레이 프레임.

use image::RgbaImage;

/// 디스플레이 한 개의 스크린샷. 캡처한 주기 안에서만 유효하다.
#[derive(Debug, Clone)]
pub struct DisplayFrame {
    /// 캡처 순서상의 디스플레이 인덱스
    pub index: usize,
    /// 디스플레이 좌상단의 절대 화면 X 좌표
    pub origin_x: i32,
    /// 디스플레이 좌상단의 절대 화면 Y 좌표
    pub origin_y: i32,
    /// RGBA 비트맵
    pub image: RgbaImage,
}

impl DisplayFrame {
    pub fn new(index: usize, origin_x: i32, origin_y: i32, image: RgbaImage) -> Self {
        Self {
            index,
            origin_x,
            origin_y,
            image,
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }
}
