/// How a major interval divides into finer ticks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Subdivision {
    pub divisor: u32,
    /// Fraction of the ruler height covered by the tick.
    pub height: f64,
}

/// Major, medium and minor ticks.
pub const SUBDIVISIONS: [Subdivision; 3] = [
    Subdivision { divisor: 1, height: 1.0 },
    Subdivision { divisor: 2, height: 0.5 },
    Subdivision { divisor: 10, height: 0.25 },
];

pub const DEFAULT_MIN_TICK_SPACING: f64 = 3.0;

/// Hard stop per level for degenerate inputs (huge widths, tiny steps).
pub const MAX_TICKS_PER_LEVEL: usize = 1 << 16;

/// Offsets this close to a tick are treated as aligned.
pub const ALIGN_EPSILON: f64 = 1e-6;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tick {
    /// Viewport-relative x position.
    pub position: f64,
    pub height: f64,
}

/// Phase of the major tick grid inside the viewport, in `[0, spacing)`.
pub fn tick_offset(viewport_offset: f64, spacing: f64) -> f64 {
    if spacing <= 0.0 || !spacing.is_finite() || !viewport_offset.is_finite() {
        return 0.0;
    }
    let offset = viewport_offset.rem_euclid(spacing);
    if offset < ALIGN_EPSILON || spacing - offset < ALIGN_EPSILON {
        0.0
    } else {
        offset
    }
}

/// Tick positions for one draw pass. Cheap to build and restartable: every
/// call to [`iter`](Self::iter) yields the same sequence.
#[derive(Clone, Debug)]
pub struct TickPlan<'a> {
    spacing: f64,
    offset: f64,
    width: f64,
    min_spacing: f64,
    subdivisions: &'a [Subdivision],
}

impl<'a> TickPlan<'a> {
    pub fn iter(&self) -> TickIter<'a> {
        TickIter {
            plan: self.clone(),
            level: 0,
            emitted: 0,
            next: None,
        }
    }

    /// Levels that survive the minimum spacing cutoff.
    pub fn levels(&self) -> impl Iterator<Item = (Subdivision, f64)> + 'a {
        let spacing = self.spacing;
        let min_spacing = self.min_spacing;
        let valid = spacing.is_finite() && spacing > 0.0;
        let subdivisions: &'a [Subdivision] = self.subdivisions;
        subdivisions
            .iter()
            .map(move |sub| (*sub, spacing / sub.divisor.max(1) as f64))
            .take_while(move |(_, spc)| valid && *spc > 0.0 && *spc >= min_spacing)
    }
}

impl<'a> IntoIterator for &TickPlan<'a> {
    type Item = Tick;
    type IntoIter = TickIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[derive(Clone, Debug)]
pub struct TickIter<'a> {
    plan: TickPlan<'a>,
    level: usize,
    emitted: usize,
    /// Position, step and height of the level being walked.
    next: Option<(f64, f64, f64)>,
}

impl Iterator for TickIter<'_> {
    type Item = Tick;

    fn next(&mut self) -> Option<Tick> {
        loop {
            if let Some((pos, spc, height)) = self.next {
                if pos < self.plan.width && pos + spc > pos && self.emitted < MAX_TICKS_PER_LEVEL {
                    self.emitted += 1;
                    self.next = Some((pos + spc, spc, height));
                    return Some(Tick { position: pos, height });
                }
                self.next = None;
                self.emitted = 0;
                self.level += 1;
            }

            let (sub, spc) = self.plan.levels().nth(self.level)?;
            // Grid origin sits at `spacing - offset - spacing`; skip whole
            // steps so at most one tick per level lands left of zero.
            let origin = -self.plan.offset;
            let skipped = (self.plan.offset / spc).floor();
            let start = origin + skipped * spc;
            if !start.is_finite() || !self.plan.width.is_finite() {
                return None;
            }
            self.next = Some((start, spc, sub.height));
        }
    }
}

/// Plans the tick marks of every subdivision level across `width` pixels.
///
/// Levels are processed coarse to fine and processing stops at the first
/// level whose step drops below `min_spacing`.
pub fn plan_ticks<'a>(
    spacing: f64,
    offset: f64,
    subdivisions: &'a [Subdivision],
    min_spacing: f64,
    width: f64,
) -> TickPlan<'a> {
    TickPlan {
        spacing,
        offset,
        width,
        min_spacing,
        subdivisions,
    }
}
