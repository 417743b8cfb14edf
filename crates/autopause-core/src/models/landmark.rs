//! 랜드마크와 유사도 점수.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::geometry::RegionDescriptor;

/// 지문 계산 실패 시 점수. 어떤 임계값도 넘지 못한다.
pub const FAILED_SCORE: f64 = -1.0;

/// 고정된 네 개의 시각적 랜드마크
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Landmark {
    /// 전투 중에만 보이는 일시정지 버튼
    Pause,
    /// 일시정지 후 같은 자리에 나타나는 재개 버튼
    Resume,
    /// 설정 아이콘
    Settings,
    /// 교체 표시
    Substitute,
}

impl Landmark {
    pub const ALL: [Landmark; 4] = [
        Landmark::Pause,
        Landmark::Resume,
        Landmark::Settings,
        Landmark::Substitute,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Landmark::Pause => "pause",
            Landmark::Resume => "resume",
            Landmark::Settings => "settings",
            Landmark::Substitute => "substitute",
        }
    }

    /// 템플릿 파일 이름
    pub fn template_file(&self) -> String {
        format!("{}.png", self.as_str())
    }
}

impl fmt::Display for Landmark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 랜드마크별 화면 영역. 한 번 만들어지면 바뀌지 않는다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DetectionProfile {
    /// 일시정지/재개 버튼 영역 (두 랜드마크가 공유)
    pub pause: RegionDescriptor,
    /// 교체 표시 영역
    pub substitute: RegionDescriptor,
    /// 설정 아이콘 영역
    pub settings: RegionDescriptor,
}

impl DetectionProfile {
    /// 랜드마크를 잘라낼 영역
    pub fn region(&self, landmark: Landmark) -> RegionDescriptor {
        match landmark {
            Landmark::Pause | Landmark::Resume => self.pause,
            Landmark::Substitute => self.substitute,
            Landmark::Settings => self.settings,
        }
    }
}

impl Default for DetectionProfile {
    fn default() -> Self {
        Self {
            pause: RegionDescriptor::new(0.933, 0.034, 0.05, 1.6, false),
            substitute: RegionDescriptor::new(0.848, 0.101, 0.05, 2.5, false),
            settings: RegionDescriptor::new(0.025, 0.945, 0.025, 1.0, true),
        }
    }
}

/// 랜드마크 → 유사도 점수 (1 = 동일, -1 = 지문 실패)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LandmarkScores(BTreeMap<Landmark, f64>);

impl LandmarkScores {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, landmark: Landmark, score: f64) {
        self.0.insert(landmark, score);
    }

    /// 점수 조회. 기록되지 않은 랜드마크는 0.
    pub fn get(&self, landmark: Landmark) -> f64 {
        self.0.get(&landmark).copied().unwrap_or(0.0)
    }

    /// 전체 점수 합 (디스플레이 선택용 집계 신뢰도)
    pub fn total(&self) -> f64 {
        self.0.values().sum()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(Landmark, f64)> for LandmarkScores {
    fn from_iter<I: IntoIterator<Item = (Landmark, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// `name: 0.00` 쌍을 이름순으로 나열
impl fmt::Display for LandmarkScores {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries: Vec<(&'static str, f64)> =
            self.0.iter().map(|(k, v)| (k.as_str(), *v)).collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));

        for (i, (name, score)) in entries.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{name}: {score:.2}")?;
        }
        Ok(())
    }
}
