use crate::domain::UniverseStepEntry;

/// Disposition of one job-log line.
#[derive(Debug, Clone, PartialEq)]
pub enum LineKind {
    Unmatched,
    /// `[date=..] [universe=U] [steps=S] : current ... target` status line.
    UniverseStepLambda(UniverseStepEntry),
    /// First-layer configuration shot from the basin (`___ (____) >== ... (xyz.0__..`).
    InitialCrossing,
    /// Trial launched from interface `interface_index`.
    InterfaceCrossing {
        interface_index: usize,
        reached_next: bool,
    },
    /// Simulation box printed after a configuration dump.
    BoundingBox { low: [f64; 3], high: [f64; 3] },
}

impl LineKind {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Unmatched => "unmatched",
            Self::UniverseStepLambda(_) => "universe-step-lambda",
            Self::InitialCrossing => "initial-crossing",
            Self::InterfaceCrossing { .. } => "interface-crossing",
            Self::BoundingBox { .. } => "bounding-box",
        }
    }
}

/// Classifies a line; patterns are tried in a fixed order and are mutually
/// exclusive, so the first hit is the only hit.
pub fn classify_line(line: &str) -> LineKind {
    if let Some(entry) = universe_step_lambda(line) {
        return LineKind::UniverseStepLambda(entry);
    }

    if is_initial_crossing(line) {
        return LineKind::InitialCrossing;
    }

    if let Some((interface_index, reached_next)) = interface_crossing(line) {
        return LineKind::InterfaceCrossing {
            interface_index,
            reached_next,
        };
    }

    if let Some((low, high)) = bounding_box(line) {
        return LineKind::BoundingBox { low, high };
    }

    LineKind::Unmatched
}

fn universe_step_lambda(line: &str) -> Option<UniverseStepEntry> {
    let mut cursor = LineCursor::new(line);
    cursor.literal("[date=")?;
    cursor.digits();
    cursor.literal("]")?;
    cursor.single_whitespace()?;
    cursor.literal("[universe=")?;
    let universe = cursor.digits1()?;
    cursor.literal("]")?;
    cursor.single_whitespace()?;
    cursor.literal("[steps=")?;
    let steps = cursor.digits1()?;
    cursor.literal("]")?;
    cursor.whitespace1()?;
    cursor.literal(":")?;
    cursor.single_whitespace()?;
    cursor.digits();
    cursor.whitespace1()?;
    cursor.literal("...")?;
    cursor.whitespace1()?;
    let target = cursor.digits1()?;
    if !cursor.at_end_or_whitespace() {
        return None;
    }

    Some(UniverseStepEntry {
        universe_id: universe.parse().ok()?,
        step_count: steps.parse().ok()?,
        target_lambda: target.parse().ok()?,
    })
}

fn is_initial_crossing(line: &str) -> bool {
    initial_crossing(line).is_some()
}

fn initial_crossing(line: &str) -> Option<()> {
    let mut cursor = LineCursor::new(line);
    cursor.spaced_digits(Trailing::OneOrMore)?;
    cursor.underscores1()?;
    cursor.single_whitespace()?;
    cursor.literal("(")?;
    cursor.underscores1()?;
    cursor.literal(")")?;
    cursor.whitespace1()?;
    cursor.literal(">==")?;
    cursor.digits();
    cursor.whitespace1()?;
    cursor.digits();
    cursor.literal("==>")?;
    cursor.spaced_digits(Trailing::Single)?;
    cursor.literal("(xyz")?;
    cursor.any_char()?;
    cursor.literal("0")?;

    // `_*\d*_`: either an underscore right away or a digit run closed by one.
    let tail = cursor.rest();
    let after_digits = tail.trim_start_matches(|ch: char| ch.is_ascii_digit());
    after_digits.starts_with('_').then_some(())
}

fn interface_crossing(line: &str) -> Option<(usize, bool)> {
    let mut cursor = LineCursor::new(line);
    cursor.whitespace();
    cursor.digits1()?;
    let gap = cursor.whitespace();
    if !cursor.rest().starts_with('(') {
        // The leading number was the writer rank; the source lambda follows.
        if gap == 0 {
            return None;
        }
        cursor.digits1()?;
        cursor.whitespace();
    }

    cursor.literal("(xyz.")?;
    let interface = cursor.digits1()?;
    cursor.literal("__")?;
    cursor.digits1()?;
    cursor.literal("_")?;
    cursor.digits1()?;
    cursor.literal(")")?;
    cursor.whitespace();
    cursor.literal(">==")?;

    let (counters, _) = cursor.rest().split_once("==>")?;
    if !is_seed_and_timestep(counters) {
        return None;
    }
    cursor.advance(counters.len());
    cursor.literal("==>")?;
    cursor.whitespace();
    cursor.digits1()?;
    cursor.whitespace();
    cursor.literal("(")?;

    let rest = cursor.rest();
    let close = rest.rfind(')')?;
    let outcome = &rest[..close];
    if outcome.is_empty() {
        return None;
    }

    Some((interface.parse().ok()?, outcome.contains("xyz")))
}

/// `\s*\d+\s*\d+\s*`: velocity seed and timestep, which may run together.
fn is_seed_and_timestep(segment: &str) -> bool {
    if !segment
        .chars()
        .all(|ch| ch.is_ascii_digit() || ch.is_whitespace())
    {
        return false;
    }

    let groups = segment.split_whitespace().collect::<Vec<_>>();
    match groups.as_slice() {
        [_, _] => true,
        [single] => single.len() >= 2,
        _ => false,
    }
}

fn bounding_box(line: &str) -> Option<([f64; 3], [f64; 3])> {
    let mut cursor = LineCursor::new(line);
    let label = cursor.take_while(|ch| ch.is_ascii_digit() || ch == '_');
    if !is_tree_label(label) {
        return None;
    }
    cursor.single_whitespace()?;
    cursor.literal("(")?;

    let mut low = [0.0; 3];
    for (axis, slot) in low.iter_mut().enumerate() {
        if axis > 0 {
            cursor.literal(",")?;
            cursor.single_whitespace()?;
        }
        *slot = cursor.plain_decimal()?;
    }
    cursor.literal(")")?;

    let (separator, high_tuple) = cursor.rest().split_once('(')?;
    if separator.trim() != "-" {
        return None;
    }
    let (inner, _) = high_tuple.split_once(')')?;
    let values = inner
        .split(',')
        .map(|value| value.trim().parse::<f64>().ok())
        .collect::<Option<Vec<_>>>()?;
    let high: [f64; 3] = values.try_into().ok()?;

    Some((low, high))
}

/// Configuration names written by the engine: `\d*_*\d*_\d*`, e.g. `0__4_12`.
fn is_tree_label(label: &str) -> bool {
    let head = label.trim_end_matches(|ch: char| ch.is_ascii_digit());
    let Some(head) = head.strip_suffix('_') else {
        return false;
    };
    head.trim_start_matches(|ch: char| ch.is_ascii_digit())
        .trim_start_matches('_')
        .chars()
        .all(|ch| ch.is_ascii_digit())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Trailing {
    Single,
    OneOrMore,
}

struct LineCursor<'a> {
    rest: &'a str,
}

impl<'a> LineCursor<'a> {
    fn new(line: &'a str) -> Self {
        Self { rest: line }
    }

    fn rest(&self) -> &'a str {
        self.rest
    }

    fn advance(&mut self, bytes: usize) {
        self.rest = &self.rest[bytes..];
    }

    fn literal(&mut self, expected: &str) -> Option<()> {
        self.rest = self.rest.strip_prefix(expected)?;
        Some(())
    }

    fn take_while(&mut self, predicate: impl Fn(char) -> bool) -> &'a str {
        let end = self
            .rest
            .find(|ch: char| !predicate(ch))
            .unwrap_or(self.rest.len());
        let (taken, rest) = self.rest.split_at(end);
        self.rest = rest;
        taken
    }

    fn digits(&mut self) -> &'a str {
        self.take_while(|ch| ch.is_ascii_digit())
    }

    fn digits1(&mut self) -> Option<&'a str> {
        let digits = self.digits();
        (!digits.is_empty()).then_some(digits)
    }

    fn underscores1(&mut self) -> Option<()> {
        (!self.take_while(|ch| ch == '_').is_empty()).then_some(())
    }

    fn whitespace(&mut self) -> usize {
        self.take_while(char::is_whitespace).chars().count()
    }

    fn whitespace1(&mut self) -> Option<()> {
        (self.whitespace() > 0).then_some(())
    }

    fn single_whitespace(&mut self) -> Option<()> {
        let mut chars = self.rest.chars();
        if !chars.next()?.is_whitespace() {
            return None;
        }
        self.rest = chars.as_str();
        Some(())
    }

    fn any_char(&mut self) -> Option<char> {
        let mut chars = self.rest.chars();
        let ch = chars.next()?;
        self.rest = chars.as_str();
        Some(ch)
    }

    fn at_end_or_whitespace(&self) -> bool {
        self.rest
            .chars()
            .next()
            .is_none_or(char::is_whitespace)
    }

    /// `\s+\d*\s+` or `\s+\d*\s`. With no digits the leading run has to
    /// cover the trailing whitespace too.
    fn spaced_digits(&mut self, trailing: Trailing) -> Option<&'a str> {
        let leading = self.whitespace();
        if leading == 0 {
            return None;
        }

        let digits = self.digits();
        if digits.is_empty() {
            return (leading >= 2).then_some(digits);
        }

        match trailing {
            Trailing::Single => self.single_whitespace()?,
            Trailing::OneOrMore => self.whitespace1()?,
        }
        Some(digits)
    }

    /// `-?\d+(\.\d+)?`
    fn plain_decimal(&mut self) -> Option<f64> {
        let start = self.rest;
        let _ = self.literal("-");
        self.digits1()?;
        if let Some(fraction) = self.rest.strip_prefix('.') {
            if fraction.starts_with(|ch: char| ch.is_ascii_digit()) {
                self.rest = fraction;
                self.digits();
            }
        }

        let consumed = &start[..start.len() - self.rest.len()];
        consumed.parse().ok()
    }
}
