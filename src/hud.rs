//! HUD text overlay

use crate::sim::{GamePhase, Snapshot};

/// Score/time readout while playing, or the end-of-game banner
pub fn status_lines(snap: &Snapshot) -> Vec<String> {
    match snap.phase() {
        GamePhase::Playing => vec![
            format!("Score:{:>3}", snap.score),
            format!("Time :{:>3}", snap.time_ticks),
        ],
        GamePhase::Won => vec!["You won!".to_string(), final_score(snap)],
        GamePhase::Lost => vec!["You lost!".to_string(), final_score(snap)],
    }
}

/// One-line result summary
pub fn final_score(snap: &Snapshot) -> String {
    format!("Score: time-{}, coins-{}.", snap.time_ticks, snap.score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::IVec2;

    fn snap(won: bool, lost: bool) -> Snapshot {
        Snapshot {
            grid_size: 7,
            player: IVec2::ZERO,
            coins: Vec::new(),
            zombies: Vec::new(),
            score: 4,
            time_ticks: 17,
            won,
            lost,
        }
    }

    #[test]
    fn test_playing_readout() {
        assert_eq!(status_lines(&snap(false, false)), vec!["Score:  4", "Time : 17"]);
    }

    #[test]
    fn test_end_banners() {
        assert_eq!(
            status_lines(&snap(true, false)),
            vec!["You won!", "Score: time-17, coins-4."]
        );
        assert_eq!(
            status_lines(&snap(false, true)),
            vec!["You lost!", "Score: time-17, coins-4."]
        );
    }
}
