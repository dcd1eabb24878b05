#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ScrollSpeed {
    Slow,
    #[default]
    Medium,
    Fast,
}

impl ScrollSpeed {
    pub const ALL: [ScrollSpeed; 3] = [ScrollSpeed::Slow, ScrollSpeed::Medium, ScrollSpeed::Fast];

    /// Pixels advanced per animation tick.
    #[inline]
    pub const fn per_tick(self) -> u32 {
        match self {
            ScrollSpeed::Slow => 1,
            ScrollSpeed::Medium => 2,
            ScrollSpeed::Fast => 4,
        }
    }

    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            ScrollSpeed::Slow => "slow",
            ScrollSpeed::Medium => "medium",
            ScrollSpeed::Fast => "fast",
        }
    }
}

/// Read position into the virtual canvas plus completed loop passes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollState {
    pub offset: u32,
    pub loop_index: u32,
}

/// Result of one tick; `offset` is authoritative for the rest of that frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScrollTick {
    pub offset: u32,
    pub loop_index: u32,
    pub wrapped: bool,
}

/// Advances the scroll offset by a constant per tick (no delta time) and
/// counts loop-boundary crossings.
#[derive(Clone, Debug)]
pub struct ScrollController {
    state: ScrollState,
    speed: ScrollSpeed,
    length: u32,
}

impl ScrollController {
    pub fn new(length: u32, speed: ScrollSpeed) -> Self {
        Self {
            state: ScrollState::default(),
            speed,
            length: length.max(1),
        }
    }

    #[inline]
    pub fn state(&self) -> ScrollState {
        self.state
    }

    #[inline]
    pub fn offset(&self) -> u32 {
        self.state.offset
    }

    #[inline]
    pub fn loop_index(&self) -> u32 {
        self.state.loop_index
    }

    #[inline]
    pub fn length(&self) -> u32 {
        self.length
    }

    pub fn set_speed(&mut self, speed: ScrollSpeed) {
        self.speed = speed;
    }

    /// Back to `{0, 0}` for a canvas of `length` rows.
    pub fn reset(&mut self, length: u32) {
        self.state = ScrollState::default();
        self.length = length.max(1);
    }

    pub fn tick(&mut self) -> ScrollTick {
        let mut offset = self.state.offset + self.speed.per_tick();
        let mut wrapped = false;
        while offset >= self.length {
            offset -= self.length;
            self.state.loop_index += 1;
            wrapped = true;
        }
        self.state.offset = offset;
        if wrapped {
            log::debug!("[scroll] loop {} complete", self.state.loop_index);
        }
        ScrollTick {
            offset,
            loop_index: self.state.loop_index,
            wrapped,
        }
    }
}
