//! 통합 테스트 공용 장면 생성기.
//!
//! 블록 패턴 화면에서 랜드마크 영역을 그대로 잘라 템플릿으로 쓰고,
//! 영역의 색을 반전시켜 "랜드마크 없음"을 만든다. 반전 이미지의 지문은
//! 원본과 거의 모든 비트가 달라 임계값 근처의 애매한 점수가 나오지 않는다.

#![allow(dead_code)]

use autopause_core::models::frame::DisplayFrame;
use autopause_core::models::geometry::{PixelRect, WindowBounds};
use autopause_core::models::landmark::{DetectionProfile, Landmark};
use autopause_vision::classifier::{crop_region, FrameClassifier};
use autopause_vision::templates::TemplateSet;
use image::{Rgba, RgbaImage};

pub const WIDTH: u32 = 1920;
pub const HEIGHT: u32 = 1080;

pub fn full_hd() -> WindowBounds {
    WindowBounds::new(0, 0, WIDTH as i32, HEIGHT as i32)
}

/// 5px 블록마다 의사 난수 색을 칠한 화면
pub fn scene(seed: u32) -> RgbaImage {
    RgbaImage::from_fn(WIDTH, HEIGHT, |x, y| {
        let (bx, by) = (x / 5, y / 5);
        let h = (bx.wrapping_mul(73_856_093) ^ by.wrapping_mul(19_349_663) ^ seed.wrapping_mul(83_492_791))
            .wrapping_mul(2_654_435_761);
        Rgba([(h >> 24) as u8, (h >> 16) as u8, (h >> 8) as u8, 255])
    })
}

/// 영역 안의 RGB 반전
pub fn invert(image: &mut RgbaImage, rect: PixelRect) {
    for y in rect.top..rect.bottom {
        for x in rect.left..rect.right {
            let p = image.get_pixel_mut(x as u32, y as u32);
            *p = Rgba([255 - p[0], 255 - p[1], 255 - p[2], p[3]]);
        }
    }
}

/// 기준 장면과 그 장면에서 뽑은 템플릿
pub struct Fixture {
    pub profile: DetectionProfile,
    pub base: RgbaImage,
    pub templates: TemplateSet,
}

impl Fixture {
    pub fn new() -> Self {
        let profile = DetectionProfile::default();
        let base = scene(7);
        let frame = DisplayFrame::new(0, 0, 0, base.clone());
        let bounds = full_hd();

        let crop = |landmark| crop_region(&frame, &profile.region(landmark), &bounds).unwrap();
        let mut resume = crop(Landmark::Pause);
        let whole = PixelRect {
            left: 0,
            top: 0,
            right: resume.width() as i32,
            bottom: resume.height() as i32,
        };
        invert(&mut resume, whole);

        let templates = TemplateSet::from_images([
            (Landmark::Pause, crop(Landmark::Pause)),
            (Landmark::Resume, resume),
            (Landmark::Substitute, crop(Landmark::Substitute)),
            (Landmark::Settings, crop(Landmark::Settings)),
        ])
        .unwrap();

        Self {
            profile,
            base,
            templates,
        }
    }

    pub fn classifier(&self) -> FrameClassifier {
        FrameClassifier::new(self.profile, self.templates.clone())
    }

    fn rect(&self, landmark: Landmark) -> PixelRect {
        self.profile.region(landmark).rect(&full_hd())
    }

    /// 전투 중: 오버레이와 일시정지 버튼이 모두 보임
    pub fn combat(&self) -> RgbaImage {
        self.base.clone()
    }

    /// 일시정지됨: 일시정지 버튼 자리에 재개 버튼
    pub fn paused(&self) -> RgbaImage {
        let mut image = self.base.clone();
        invert(&mut image, self.rect(Landmark::Pause));
        image
    }

    /// 오버레이 없음: 교체 표시와 설정 아이콘이 사라짐
    pub fn in_game(&self) -> RgbaImage {
        let mut image = self.base.clone();
        invert(&mut image, self.rect(Landmark::Substitute));
        invert(&mut image, self.rect(Landmark::Settings));
        image
    }
}
