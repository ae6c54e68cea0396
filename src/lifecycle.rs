/// Kinds of resources the host tracks across mount and unmount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceTag {
    Scene,
    Camera,
    Material,
    Geometry,
    Node,
    ClickListener,
    Timeline,
    RenderLoop,
    FrameRequest,
}

/// Tracks every live resource by tag. Mount acquires in dependency order,
/// unmount releases in reverse. Releasing a tag that is not live is a no-op,
/// which keeps double-unmount harmless.
#[derive(Debug, Default)]
pub struct ResourceRegistry {
    live: Vec<ResourceTag>,
}

impl ResourceRegistry {
    pub fn new() -> Self {
        Self { live: Vec::new() }
    }

    pub fn acquire(&mut self, tag: ResourceTag) {
        self.live.push(tag);
    }

    /// Releases the most recent acquisition of `tag`, if any.
    pub fn release(&mut self, tag: ResourceTag) {
        if let Some(index) = self.live.iter().rposition(|&live| live == tag) {
            self.live.remove(index);
        }
    }

    pub fn is_live(&self, tag: ResourceTag) -> bool {
        self.live.contains(&tag)
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    pub fn live_handles(&self) -> &[ResourceTag] {
        &self.live
    }
}

/// One pending frame request at most. Requesting while one is pending
/// coalesces; beginning a tick consumes the slot or reports that the frame
/// should be skipped.
#[derive(Debug, Default)]
pub struct FrameScheduler {
    pending: bool,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self { pending: false }
    }

    /// Requests a frame. Returns true if this call armed the slot, false if
    /// a request was already pending.
    pub fn request(&mut self) -> bool {
        let armed = !self.pending;
        self.pending = true;
        armed
    }

    /// Consumes the pending request. Returns false when no request is
    /// pending, meaning the caller should skip the tick. A teardown between
    /// request and tick cancels the slot, so the stale tick falls through
    /// here instead of touching disposed resources.
    pub fn begin_tick(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }

    pub fn cancel(&mut self) {
        self.pending = false;
    }

    pub fn has_pending(&self) -> bool {
        self.pending
    }
}
