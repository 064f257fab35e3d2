//! Discrete visibility state for a run of section items.
//!
//! Turns "the active index is now `i`" into an ordered list of show/hide
//! and media commands. The DOM layer applies them verbatim.

use fnv::FnvHashSet;

use super::scroll::BEFORE_START;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VisibilityPolicy {
    /// Only the active item is shown (pinned desktop layouts).
    OnlyCurrent,
    /// Every item up to and including the active one stays shown (stacked mobile layouts).
    UpToCurrent,
}

impl VisibilityPolicy {
    #[inline]
    pub fn is_visible(self, item: usize, current: i32) -> bool {
        match self {
            Self::OnlyCurrent => item as i32 == current,
            Self::UpToCurrent => (item as i32) <= current,
        }
    }
}

/// Step direction for a keyboard key: `ArrowLeft` is -1, `ArrowRight` is +1.
pub fn arrow_direction(key: &str) -> Option<i32> {
    match key {
        "ArrowLeft" => Some(-1),
        "ArrowRight" => Some(1),
        _ => None,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionCommand {
    Show(usize),
    Hide(usize),
    PlayMedia(usize),
    PauseMedia(usize),
}

#[derive(Clone, Debug)]
pub struct SectionState {
    item_count: usize,
    current: i32,
    policy: VisibilityPolicy,
    playing: FnvHashSet<usize>,
}

impl SectionState {
    pub fn new(item_count: usize, policy: VisibilityPolicy) -> Self {
        Self {
            item_count,
            current: BEFORE_START,
            policy,
            playing: FnvHashSet::default(),
        }
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn current(&self) -> i32 {
        self.current
    }

    pub fn policy(&self) -> VisibilityPolicy {
        self.policy
    }

    pub fn is_playing(&self, item: usize) -> bool {
        self.playing.contains(&item)
    }

    /// Move to `index` (clamped to `-1..item_count`). Commands are emitted
    /// only when the index actually changes.
    pub fn set_index(&mut self, index: i32) -> Vec<SectionCommand> {
        if self.item_count == 0 {
            return Vec::new();
        }
        let index = index.clamp(BEFORE_START, self.item_count as i32 - 1);
        if index == self.current {
            return Vec::new();
        }
        self.current = index;
        self.visibility_commands()
    }

    /// Switch policy (viewport crossed the desktop breakpoint) and return to
    /// the pre-start state. Every playing item is paused.
    pub fn rebuild(&mut self, policy: VisibilityPolicy) -> Vec<SectionCommand> {
        self.policy = policy;
        self.current = BEFORE_START;
        let mut paused: Vec<usize> = self.playing.drain().collect();
        paused.sort_unstable();
        paused.into_iter().map(SectionCommand::PauseMedia).collect()
    }

    /// Step by `direction` items, staying inside `0..item_count`.
    pub fn navigate(&mut self, direction: i32) -> Vec<SectionCommand> {
        let target = self.current.max(0) + direction;
        if target < 0 || target >= self.item_count as i32 {
            return Vec::new();
        }
        self.set_index(target)
    }

    pub fn prev_disabled(&self) -> bool {
        self.current <= 0
    }

    pub fn next_disabled(&self) -> bool {
        self.current >= self.item_count as i32 - 1
    }

    fn visibility_commands(&mut self) -> Vec<SectionCommand> {
        let mut out = Vec::with_capacity(self.item_count * 2);
        for i in 0..self.item_count {
            if self.policy.is_visible(i, self.current) {
                out.push(SectionCommand::Show(i));
                if self.playing.insert(i) {
                    out.push(SectionCommand::PlayMedia(i));
                }
            } else {
                out.push(SectionCommand::Hide(i));
                if self.playing.remove(&i) {
                    out.push(SectionCommand::PauseMedia(i));
                }
            }
        }
        out
    }
}
