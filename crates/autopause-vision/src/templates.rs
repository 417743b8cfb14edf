//! 랜드마크 템플릿.
//!
//! 시작 시 한 번 로드하고 지문까지 미리 계산해 둔다.

use std::collections::BTreeMap;
use std::path::Path;

use autopause_core::error::CoreError;
use autopause_core::models::landmark::Landmark;
use image::RgbaImage;
use tracing::{debug, info};

use crate::phash::Fingerprint;

/// 네 랜드마크의 템플릿 지문
#[derive(Debug, Clone)]
pub struct TemplateSet {
    fingerprints: BTreeMap<Landmark, Fingerprint>,
}

impl TemplateSet {
    /// 디렉토리에서 `<landmark>.png` 파일을 읽어 생성
    pub fn load_dir(dir: &Path) -> Result<Self, CoreError> {
        if !dir.is_dir() {
            return Err(CoreError::Config(format!(
                "템플릿 디렉토리 없음: {} (필요 파일: {})",
                dir.display(),
                expected_files().join(", ")
            )));
        }

        let mut images = Vec::with_capacity(Landmark::ALL.len());
        for landmark in Landmark::ALL {
            let path = dir.join(landmark.template_file());
            let image = image::open(&path).map_err(|e| CoreError::Template {
                name: landmark.to_string(),
                message: format!("{}: {e}", path.display()),
            })?;
            debug!("템플릿 로드: {} ({}x{})", path.display(), image.width(), image.height());
            images.push((landmark, image.to_rgba8()));
        }

        let set = Self::from_images(images)?;
        info!("템플릿 {}개 로드 완료: {}", set.fingerprints.len(), dir.display());
        Ok(set)
    }

    /// 메모리 이미지로 생성. 네 랜드마크가 모두 있어야 한다.
    pub fn from_images<I>(images: I) -> Result<Self, CoreError>
    where
        I: IntoIterator<Item = (Landmark, RgbaImage)>,
    {
        let mut fingerprints = BTreeMap::new();
        for (landmark, image) in images {
            let fingerprint = Fingerprint::of(&image).map_err(|e| CoreError::Template {
                name: landmark.to_string(),
                message: e.to_string(),
            })?;
            fingerprints.insert(landmark, fingerprint);
        }

        if let Some(missing) = Landmark::ALL
            .iter()
            .find(|l| !fingerprints.contains_key(*l))
        {
            return Err(CoreError::Template {
                name: missing.to_string(),
                message: "템플릿 없음".to_string(),
            });
        }

        Ok(Self { fingerprints })
    }

    /// 랜드마크 템플릿 지문
    pub fn fingerprint(&self, landmark: Landmark) -> Fingerprint {
        // from_images에서 네 개 모두 존재함을 보장
        self.fingerprints[&landmark]
    }
}

/// 템플릿 디렉토리에 있어야 하는 파일 이름
pub fn expected_files() -> Vec<String> {
    Landmark::ALL.iter().map(Landmark::template_file).collect()
}
