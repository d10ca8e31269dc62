/// Tag decomposition — splitting fused tokens such as `ImAcapo` into
/// dictionary entries and rendering them.
///
/// Resolution order for a token:
/// 1. an exact dictionary key;
/// 2. a time slot, `T` followed by four or more digits (`T1800`);
/// 3. a known root followed by a certainty marker (`Zaic`);
/// 4. the longest dictionary key that prefixes the token, followed by the
///    remainder resolved as a token of its own (so `Im` + `Acapo` reads
///    as the identity fragment followed by the action);
/// 5. the token itself, unchanged.

use serde::Serialize;

use crate::core::dictionary::SymbolDictionary;

/// Letter that introduces a time slot.
const TIME_SLOT: char = 'T';
const CERTAINTY_MARKERS: [&str; 2] = ["ic", "ec"];

/// One piece of a decomposed token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Segment<'t> {
    /// A dictionary key.
    Known(&'t str),
    /// `T` + `HHMM...`; digits past the fourth are ignored.
    Time { hour: &'t str, minute: &'t str },
    /// A dictionary key followed by `ic` or `ec`.
    Certain { root: &'t str, marker: &'t str },
    /// Text matching nothing in the dictionary.
    Unknown(&'t str),
}

/// Splits and renders tokens against a dictionary.
#[derive(Debug, Clone, Copy)]
pub struct Decomposer<'d> {
    dict: &'d SymbolDictionary,
}

impl<'d> Decomposer<'d> {
    pub fn new(dict: &'d SymbolDictionary) -> Self {
        Self { dict }
    }

    /// Split `token` into segments. Never fails; an unknown token comes
    /// back as a single [`Segment::Unknown`].
    pub fn segment<'t>(&self, token: &'t str) -> Vec<Segment<'t>> {
        let mut segments = Vec::new();
        self.segment_into(token, &mut segments);
        segments
    }

    fn segment_into<'t>(&self, token: &'t str, out: &mut Vec<Segment<'t>>) {
        if token.is_empty() {
            return;
        }
        if self.dict.contains(token) {
            out.push(Segment::Known(token));
            return;
        }
        if let Some(time) = time_slot(token) {
            out.push(time);
            return;
        }
        if let Some(certain) = self.certainty_suffix(token) {
            out.push(certain);
            return;
        }
        match self.dict.longest_prefix(token) {
            Some(prefix) => {
                tracing::trace!(target: "tuacavo::decompose", token, prefix, "prefix match");
                out.push(Segment::Known(prefix));
                self.segment_into(&token[prefix.len()..], out);
            }
            None => {
                tracing::debug!(target: "tuacavo::decompose", token, "unknown tag, passed through");
                out.push(Segment::Unknown(token));
            }
        }
    }

    fn certainty_suffix<'t>(&self, token: &'t str) -> Option<Segment<'t>> {
        CERTAINTY_MARKERS.iter().find_map(|marker| {
            let root = token.strip_suffix(marker)?;
            if root.is_empty() || !self.dict.contains(root) {
                return None;
            }
            let marker = &token[root.len()..];
            Some(Segment::Certain { root, marker })
        })
    }

    /// Render a single segment.
    pub fn render_segment(&self, segment: &Segment<'_>) -> String {
        match segment {
            Segment::Known(key) => self.lookup(key).to_string(),
            Segment::Time { hour, minute } => format!("{hour}시 {minute}분"),
            Segment::Certain { root, marker } => {
                format!("{}({})", self.lookup(root).trim_end(), self.lookup(marker))
            }
            Segment::Unknown(text) => text.to_string(),
        }
    }

    /// Render a whole token by concatenating its segments.
    pub fn render(&self, token: &str) -> String {
        self.segment(token)
            .iter()
            .map(|s| self.render_segment(s))
            .collect()
    }

    fn lookup<'k>(&self, key: &'k str) -> &'k str
    where
        'd: 'k,
    {
        self.dict.get(key).unwrap_or(key)
    }
}

fn time_slot(token: &str) -> Option<Segment<'_>> {
    let digits = token.strip_prefix(TIME_SLOT)?;
    if digits.len() < 4 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(Segment::Time {
        hour: &digits[0..2],
        minute: &digits[2..4],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn builtin() -> Decomposer<'static> {
        Decomposer::new(SymbolDictionary::builtin())
    }

    #[test]
    fn exact_key() {
        assert_eq!(builtin().render("Uecas"), "대학교");
        assert_eq!(builtin().segment("Z"), vec![Segment::Known("Z")]);
    }

    #[test]
    fn identity_prefix() {
        let d = builtin();
        assert_eq!(
            d.segment("ImAcapo"),
            vec![Segment::Known("Im"), Segment::Known("Acapo")]
        );
        assert_eq!(d.render("ImAcapo"), "내(화자)가 물리적 행동을 ");
        assert_eq!(d.render("OmZaic"), "제3자가 평온/수용(확정)");
    }

    #[test]
    fn longest_prefix_chain() {
        let d = builtin();
        assert_eq!(d.render("ZaPu"), "평온/수용강화");
        assert_eq!(
            d.segment("LiadMu"),
            vec![Segment::Known("Liad"), Segment::Known("Mu")]
        );
    }

    #[test]
    fn certainty_suffix() {
        let d = builtin();
        assert_eq!(
            d.segment("Zaic"),
            vec![Segment::Certain {
                root: "Za",
                marker: "ic"
            }]
        );
        assert_eq!(d.render("Lavec"), "확인완료(가변)");
    }

    #[test]
    fn time_slot_rendering() {
        let d = builtin();
        assert_eq!(d.render("T1800"), "18시 00분");
        assert_eq!(d.render("T093015"), "09시 30분");
        assert_eq!(
            d.segment("T0730"),
            vec![Segment::Time {
                hour: "07",
                minute: "30"
            }]
        );
    }

    #[test]
    fn short_time_digits_fall_back_to_prefix() {
        assert_eq!(builtin().render("T18"), "시간18");
    }

    #[test]
    fn unknown_passes_through() {
        let d = builtin();
        assert_eq!(d.render("Qx"), "Qx");
        assert_eq!(d.segment("Qx"), vec![Segment::Unknown("Qx")]);
        assert_eq!(d.render("Acapox"), "물리적 행동을 x");
    }

    #[test]
    fn empty_dictionary_passes_everything_through() {
        let empty = SymbolDictionary::default();
        let d = Decomposer::new(&empty);
        assert_eq!(d.render("ImAcapo"), "ImAcapo");
    }

    /// Built-in key pairs `(a, b)` whose concatenation resolves by the
    /// longest-prefix rule alone: `a` is the longest key prefixing `a + b`,
    /// and neither the exact, time nor certainty rule applies first.
    fn prefix_pairs() -> Vec<(String, String)> {
        let dict = SymbolDictionary::builtin();
        let keys: Vec<&str> = dict.sorted_entries().into_iter().map(|(k, _)| k).collect();
        let mut pairs = Vec::new();
        for a in &keys {
            for b in &keys {
                let joined = format!("{a}{b}");
                let certain = CERTAINTY_MARKERS
                    .iter()
                    .any(|m| joined.strip_suffix(m).is_some_and(|root| dict.contains(root)));
                if dict.longest_prefix(&joined) == Some(*a)
                    && !dict.contains(&joined)
                    && !certain
                    && time_slot(&joined).is_none()
                {
                    pairs.push((a.to_string(), b.to_string()));
                }
            }
        }
        pairs
    }

    proptest! {
        #[test]
        fn longest_prefix_then_remainder(pair in proptest::sample::select(prefix_pairs())) {
            let (a, b) = pair;
            let dict = SymbolDictionary::builtin();
            let d = Decomposer::new(dict);
            let expected = format!("{}{}", dict.get(&a).unwrap(), dict.get(&b).unwrap());
            prop_assert_eq!(d.render(&format!("{a}{b}")), expected);
        }
    }
}
