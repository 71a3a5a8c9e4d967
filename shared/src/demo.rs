//! Scripted five-step walkthrough on the demo page.

use std::time::Duration;

use crate::error::ModelError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoScene {
    ViralForward,
    AnalysisResult,
    EducationalInsight,
    ShareResult,
    AdminDashboard,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoStep {
    pub id: u8,
    pub title: &'static str,
    pub description: &'static str,
    pub emoji: &'static str,
    pub duration: Duration,
    pub scene: DemoScene,
}

pub fn demo_steps() -> Vec<DemoStep> {
    vec![
        DemoStep {
            id: 1,
            title: "Paste Viral Forward",
            description: "User receives suspicious content and wants verification",
            emoji: "📱",
            duration: Duration::from_millis(3000),
            scene: DemoScene::ViralForward,
        },
        DemoStep {
            id: 2,
            title: "Instant Analysis Result",
            description: "AI provides credibility score, verdict, and evidence in under 2 seconds",
            emoji: "⚡",
            duration: Duration::from_millis(4000),
            scene: DemoScene::AnalysisResult,
        },
        DemoStep {
            id: 3,
            title: "Educational Insight",
            description: "User taps 'Why Misleading?' to understand manipulation techniques",
            emoji: "🧠",
            duration: Duration::from_millis(4000),
            scene: DemoScene::EducationalInsight,
        },
        DemoStep {
            id: 4,
            title: "Share Verified Result",
            description: "User gets WhatsApp-ready format to educate their network",
            emoji: "📤",
            duration: Duration::from_millis(3000),
            scene: DemoScene::ShareResult,
        },
        DemoStep {
            id: 5,
            title: "Admin Dashboard View",
            description: "Behind-the-scenes look at moderation and analytics",
            emoji: "📊",
            duration: Duration::from_millis(3000),
            scene: DemoScene::AdminDashboard,
        },
    ]
}

/// Linear wizard state. `steps` is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoWalkthrough {
    steps: Vec<DemoStep>,
    current: usize,
    playing: bool,
    elapsed: Duration,
}

impl Default for DemoWalkthrough {
    fn default() -> Self {
        Self {
            steps: demo_steps(),
            current: 0,
            playing: false,
            elapsed: Duration::ZERO,
        }
    }
}

impl DemoWalkthrough {
    pub fn steps(&self) -> &[DemoStep] {
        &self.steps
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_step(&self) -> &DemoStep {
        &self.steps[self.current]
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 == self.steps.len()
    }

    pub fn next(&mut self) {
        if !self.is_last() {
            self.current += 1;
            self.elapsed = Duration::ZERO;
        }
    }

    pub fn previous(&mut self) {
        if !self.is_first() {
            self.current -= 1;
            self.elapsed = Duration::ZERO;
        }
    }

    pub fn jump_to(&mut self, index: usize) -> Result<(), ModelError> {
        if index >= self.steps.len() {
            return Err(ModelError::UnknownStep(index));
        }
        self.current = index;
        self.elapsed = Duration::ZERO;
        Ok(())
    }

    pub fn toggle_playing(&mut self) {
        self.playing = !self.playing;
    }

    pub fn reset(&mut self) {
        self.current = 0;
        self.playing = false;
        self.elapsed = Duration::ZERO;
    }

    /// Advances autoplay by `dt`. Returns true when the step changed.
    pub fn tick(&mut self, dt: Duration) -> bool {
        if !self.playing {
            return false;
        }
        if self.is_last() {
            self.playing = false;
            return false;
        }
        self.elapsed += dt;
        if self.elapsed < self.current_step().duration {
            return false;
        }
        self.elapsed = Duration::ZERO;
        self.current += 1;
        if self.is_last() {
            self.playing = false;
        }
        true
    }

    pub fn progress_percent(&self) -> u8 {
        ((self.current + 1) * 100 / self.steps.len()) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_saturates() {
        let mut demo = DemoWalkthrough::default();
        demo.previous();
        assert_eq!(demo.current_index(), 0);
        for _ in 0..10 {
            demo.next();
        }
        assert_eq!(demo.current_index(), 4);
        assert!(demo.is_last());
        assert_eq!(demo.progress_percent(), 100);
    }

    #[test]
    fn test_progress_percent() {
        let mut demo = DemoWalkthrough::default();
        assert_eq!(demo.progress_percent(), 20);
        demo.next();
        assert_eq!(demo.progress_percent(), 40);
    }

    #[test]
    fn test_tick_is_ignored_while_paused() {
        let mut demo = DemoWalkthrough::default();
        assert!(!demo.tick(Duration::from_secs(60)));
        assert_eq!(demo.current_index(), 0);
    }

    #[test]
    fn test_autoplay_runs_to_the_end_and_stops() {
        let mut demo = DemoWalkthrough::default();
        demo.toggle_playing();

        assert!(!demo.tick(Duration::from_millis(2900)));
        assert!(demo.tick(Duration::from_millis(100)));
        assert_eq!(demo.current_index(), 1);

        let mut changes = 0;
        for _ in 0..200 {
            if demo.tick(Duration::from_millis(100)) {
                changes += 1;
            }
        }
        assert_eq!(changes, 3);
        assert!(demo.is_last());
        assert!(!demo.is_playing());
    }

    #[test]
    fn test_manual_step_restarts_the_timer() {
        let mut demo = DemoWalkthrough::default();
        demo.toggle_playing();
        demo.tick(Duration::from_millis(2500));
        demo.next();
        // Step two lasts four seconds from the moment it was entered.
        assert!(!demo.tick(Duration::from_millis(3900)));
        assert!(demo.tick(Duration::from_millis(100)));
        assert_eq!(demo.current_index(), 2);
    }

    #[test]
    fn test_jump_and_reset() {
        let mut demo = DemoWalkthrough::default();
        assert_eq!(demo.jump_to(7), Err(ModelError::UnknownStep(7)));
        demo.jump_to(3).expect("valid step");
        assert_eq!(demo.current_step().scene, DemoScene::ShareResult);
        demo.toggle_playing();
        demo.reset();
        assert_eq!(demo.current_index(), 0);
        assert!(!demo.is_playing());
    }
}
