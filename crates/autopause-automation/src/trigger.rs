//! 클릭 트리거.
//!
//! 직전 주기 상태와 현재 상태를 비교해 `InGame → Combat` 전이에서만 발화한다.
//! 전투가 계속되는 동안 반복 클릭하지 않는다.

use autopause_core::models::state::ApplicationState;

/// 에지 트리거: 직전 상태 하나만 보관
#[derive(Debug, Clone)]
pub struct EdgeTrigger {
    previous: ApplicationState,
}

impl EdgeTrigger {
    /// 직전 상태를 `Error`로 초기화. 시작하자마자 전투 중이면 클릭하지 않는다.
    pub fn new() -> Self {
        Self {
            previous: ApplicationState::Error,
        }
    }

    pub fn previous(&self) -> ApplicationState {
        self.previous
    }

    /// 현재 상태를 기록하고 클릭해야 하면 true
    pub fn observe(&mut self, current: ApplicationState) -> bool {
        let fire = current == ApplicationState::Combat && self.previous == ApplicationState::InGame;
        self.previous = current;
        fire
    }
}

impl Default for EdgeTrigger {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ApplicationState::*;

    fn fire_count(states: &[ApplicationState]) -> usize {
        let mut trigger = EdgeTrigger::new();
        states.iter().filter(|&&s| trigger.observe(s)).count()
    }

    #[test]
    fn one_click_per_combat_entry() {
        assert_eq!(fire_count(&[InGame, Combat, Combat, Combat, InGame, Combat]), 2);
    }

    #[test]
    fn starting_in_combat_does_not_fire() {
        assert_eq!(fire_count(&[Combat, Combat]), 0);
    }

    #[test]
    fn only_in_game_precedes_a_click() {
        assert_eq!(fire_count(&[Paused, Combat]), 0);
        assert_eq!(fire_count(&[OutOfGame, Combat]), 0);
        assert_eq!(fire_count(&[Error, Combat]), 0);
        assert_eq!(fire_count(&[InGame, Paused, Combat]), 0);
    }

    #[test]
    fn previous_tracks_last_observation() {
        let mut trigger = EdgeTrigger::new();
        assert_eq!(trigger.previous(), Error);
        trigger.observe(InGame);
        assert_eq!(trigger.previous(), InGame);
        assert!(trigger.observe(Combat));
        assert_eq!(trigger.previous(), Combat);
    }
}
