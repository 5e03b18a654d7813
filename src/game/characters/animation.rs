// Sprite animation for dungeon actors

/// A looping run of frames on one row of a sprite sheet
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationClip {
    /// Name of the animation ("idle", "walk")
    pub name: &'static str,
    /// Number of frames in the animation
    pub frame_count: usize,
    /// Duration of each frame in seconds
    pub frame_duration: f32,
}

impl AnimationClip {
    pub fn new(name: &'static str, frame_count: usize, fps: f32) -> Self {
        Self {
            name,
            frame_count,
            frame_duration: 1.0 / fps,
        }
    }

    /// Get the total duration of one animation cycle
    #[allow(dead_code)]
    pub fn total_duration(&self) -> f32 {
        self.frame_count as f32 * self.frame_duration
    }
}

/// Plays one clip at a time, advanced by the frame loop
#[derive(Debug, Clone)]
pub struct AnimationPlayer {
    clip: AnimationClip,
    current_frame: usize,
    frame_timer: f32,
}

impl AnimationPlayer {
    pub fn new(clip: AnimationClip) -> Self {
        Self {
            clip,
            current_frame: 0,
            frame_timer: 0.0,
        }
    }

    /// Switch clip; restarts only when the clip actually changes
    pub fn play(&mut self, clip: AnimationClip) {
        if self.clip.name != clip.name {
            self.clip = clip;
            self.current_frame = 0;
            self.frame_timer = 0.0;
        }
    }

    /// Advance by `dt` seconds, wrapping around at the end of the clip
    pub fn tick(&mut self, dt: f32) {
        if self.clip.frame_count == 0 || self.clip.frame_duration <= 0.0 {
            return;
        }

        self.frame_timer += dt.max(0.0);
        while self.frame_timer >= self.clip.frame_duration {
            self.frame_timer -= self.clip.frame_duration;
            self.current_frame = (self.current_frame + 1) % self.clip.frame_count;
        }
    }

    #[allow(dead_code)]
    pub fn clip(&self) -> &AnimationClip {
        &self.clip
    }

    pub fn current_frame(&self) -> usize {
        self.current_frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn test_clip() -> AnimationClip {
        AnimationClip::new("test", 4, 10.0)
    }

    #[test]
    fn test_animation_clip_duration() {
        let clip = AnimationClip::new("walk", 6, 10.0);
        assert_relative_eq!(clip.frame_duration, 0.1);
        assert_relative_eq!(clip.total_duration(), 0.6, epsilon = 1e-6);
    }

    #[test]
    fn test_tick_advances_frames() {
        let mut player = AnimationPlayer::new(test_clip());
        player.tick(0.15);
        assert_eq!(player.current_frame(), 1);
        player.tick(0.1);
        assert_eq!(player.current_frame(), 2);
    }

    #[test]
    fn test_tick_wraps_around() {
        let mut player = AnimationPlayer::new(AnimationClip::new("test", 3, 10.0));
        player.tick(0.35);
        assert_eq!(player.current_frame(), 0);
    }

    #[test]
    fn test_play_same_clip_keeps_frame() {
        let mut player = AnimationPlayer::new(test_clip());
        player.tick(0.25);
        let frame = player.current_frame();
        player.play(test_clip());
        assert_eq!(player.current_frame(), frame);
    }

    #[test]
    fn test_play_other_clip_restarts() {
        let mut player = AnimationPlayer::new(test_clip());
        player.tick(0.25);
        player.play(AnimationClip::new("walk", 4, 12.0));
        assert_eq!(player.clip().name, "walk");
        assert_eq!(player.current_frame(), 0);
    }

    #[test]
    fn test_empty_clip_does_not_panic() {
        let mut player = AnimationPlayer::new(AnimationClip::new("empty", 0, 10.0));
        player.tick(1.0);
        assert_eq!(player.current_frame(), 0);
    }
}
