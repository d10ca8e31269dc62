/// Tree rendering — turns a parsed [`Document`] into Korean prose.

use crate::core::decompose::Decomposer;
use crate::core::dictionary::SymbolDictionary;
use crate::core::numeric::NumericCode;
use crate::core::particle::{attach, Particle};
use crate::schema::tree::{
    Atom, AtomHead, BracketDesc, CausalKind, Document, Expr, Grouping, Property, PropertyValue,
    SequenceKind, Tag, TagClass, TagContent, Target, VectorSuffix,
};

/// Appended to a line that does not already end a sentence.
pub const SENTENCE_ENDING: &str = "함.";
pub const WARNING_MARKER: &str = " [경고]";

/// Append `fragment` to `buf` with exactly one space between them.
fn push_spaced(buf: &mut String, fragment: &str) {
    let fragment = fragment.trim_start();
    if fragment.is_empty() {
        return;
    }
    let kept = buf.trim_end().len();
    buf.truncate(kept);
    if !buf.is_empty() {
        buf.push(' ');
    }
    buf.push_str(fragment);
}

/// Append `fragment` directly after the last non-space character of `buf`.
fn push_attached(buf: &mut String, fragment: &str) {
    let kept = buf.trim_end().len();
    buf.truncate(kept);
    buf.push_str(fragment);
}

/// Append `함.` unless the line already ends in `.`, `?` or `!`.
pub fn terminate(line: &str) -> String {
    if line.ends_with(['.', '?', '!']) {
        line.to_string()
    } else {
        format!("{line}{SENTENCE_ENDING}")
    }
}

pub struct Renderer<'d> {
    dict: &'d SymbolDictionary,
    decomposer: Decomposer<'d>,
}

impl<'d> Renderer<'d> {
    pub fn new(dict: &'d SymbolDictionary) -> Self {
        Self {
            dict,
            decomposer: Decomposer::new(dict),
        }
    }

    /// Render every top-level expression as its own terminated line.
    pub fn render_document(&self, doc: &Document) -> String {
        doc.expressions
            .iter()
            .map(|expr| terminate(self.render_expr(expr).trim()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn render_expr(&self, expr: &Expr) -> String {
        match expr {
            Expr::Atom(atom) => self.render_atom(atom),
            Expr::Causal { left, kind, right } => {
                let left = self.render_expr(left);
                let right = self.render_expr(right);
                let (left, right) = (left.trim_end(), right.trim_start());
                match kind {
                    CausalKind::Immediate => format!("{left}하게 되며, 이로 인해 {right}"),
                    CausalKind::Delayed => format!("{left}하고 나서 {right}"),
                }
            }
            Expr::Sequence { left, kind, right } => {
                let left = self.render_expr(left);
                let right = self.render_expr(right);
                let (left, right) = (left.trim_end(), right.trim_start());
                match kind {
                    SequenceKind::Additive => format!("{left} + {right}"),
                    // Repeated actions are tagged apart in the tree but
                    // read the same as a comma sequence.
                    SequenceKind::Comma | SequenceKind::Repeated => format!("{left}, {right}"),
                }
            }
        }
    }

    pub fn render_atom(&self, atom: &Atom) -> String {
        let mut out = match &atom.head {
            Some(AtomHead::Content(content)) => self.render_tag_content(content),
            Some(AtomHead::Group(group)) => self.render_grouping(group),
            None => String::new(),
        };
        if let Some(target) = &atom.target {
            let target = self.render_target(target);
            push_spaced(&mut out, &target);
            // keep the trailing space of the target clause
            out.push(' ');
        }
        if let Some(property) = &atom.property {
            push_spaced(&mut out, &self.render_property(property));
        }
        if atom.warning {
            push_spaced(&mut out, WARNING_MARKER);
        }
        out
    }

    pub fn render_grouping(&self, group: &Grouping) -> String {
        let (open, close) = group.kind.brackets();
        format!("{open}{}{close}", self.render_expr(&group.inner).trim())
    }

    pub fn render_tag_content(&self, content: &TagContent) -> String {
        let mut out = self.render_tag_list(&content.tags);
        if let Some(code) = &content.code {
            out.push_str(&NumericCode::decode(code).to_string());
        }
        if let Some(vector) = &content.vector {
            out.push_str(&self.render_vector(vector));
        }
        if let Some(desc) = &content.desc {
            out.push_str(&self.render_bracket_desc(desc));
        }
        out
    }

    /// Fragments are concatenated; any spacing comes from the fragments.
    pub fn render_tag_list(&self, tags: &[Tag]) -> String {
        let mut out = String::new();
        for tag in tags {
            match tag.class {
                TagClass::Question => push_attached(&mut out, "?"),
                TagClass::Certainty if !out.trim().is_empty() => {
                    let marker = self.decomposer.render(&tag.text);
                    push_attached(&mut out, &format!("({marker})"));
                }
                TagClass::Topic if !out.trim().is_empty() => {
                    out = attach(&out, Particle::Topic);
                    out.push(' ');
                }
                _ => out.push_str(&self.decomposer.render(&tag.text)),
            }
        }
        out
    }

    /// The vector's own `?` is not rendered.
    pub fn render_vector(&self, vector: &VectorSuffix) -> String {
        let mut out = self.decomposer.render(&vector.tag);
        if let Some(code) = &vector.code {
            out.push_str(&NumericCode::decode(code).to_string());
        }
        out
    }

    pub fn render_bracket_desc(&self, desc: &BracketDesc) -> String {
        let inner = match desc {
            BracketDesc::Word(word) => self.render_word(word),
            BracketDesc::Expr(expr) => self.render_expr(expr),
        };
        format!("({})", inner.trim())
    }

    /// `<phrase><object particle> 대상으로`, followed by any chained target.
    pub fn render_target(&self, target: &Target) -> String {
        let (phrase, nested) = match target {
            Target::Word(word) => (self.render_word(word), None),
            Target::Desc(desc) => (self.render_bracket_desc(desc), None),
            Target::Group(group) => (self.render_grouping(group), None),
            Target::Content(content) => (self.render_tag_content(content), None),
            Target::Atom(atom) => {
                let phrase = match &atom.head {
                    Some(AtomHead::Content(content)) => self.render_tag_content(content),
                    Some(AtomHead::Group(group)) => self.render_grouping(group),
                    None => String::new(),
                };
                (phrase, atom.target.as_ref())
            }
        };
        let mut out = format!("{} 대상으로", attach(&phrase, Particle::Object));
        if let Some(nested) = nested {
            push_spaced(&mut out, &self.render_target(nested));
        }
        out
    }

    /// ` (성격: <phrase>)`
    pub fn render_property(&self, property: &Property) -> String {
        let mut phrase = match &property.value {
            PropertyValue::Content(content) => self.render_tag_content(content),
            PropertyValue::Group(group) => self.render_grouping(group),
            PropertyValue::Word(word) => self.render_word(word),
            PropertyValue::Number(number) => number.clone(),
            PropertyValue::Causal(expr) => self.render_expr(expr),
        };
        if let Some(desc) = &property.desc {
            phrase.push_str(&self.render_bracket_desc(desc));
        }
        format!(" (성격: {})", phrase.trim())
    }

    /// Free words are looked up verbatim and never decomposed.
    fn render_word(&self, word: &str) -> String {
        self.dict.get(word).unwrap_or(word).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parser::parse;

    fn render(src: &str) -> String {
        let doc = parse(src).unwrap();
        Renderer::new(SymbolDictionary::builtin()).render_document(&doc)
    }

    #[test]
    fn bare_tag_is_terminated() {
        assert_eq!(render("Z"), "현재 상황함.");
    }

    #[test]
    fn time_slot() {
        assert_eq!(render("T1800"), "18시 00분함.");
    }

    #[test]
    fn grouped_target() {
        assert_eq!(
            render("{ImAcapo @Uecas}"),
            "{내(화자)가 물리적 행동을 대학교를 대상으로}함."
        );
    }

    #[test]
    fn target_particle_after_consonant() {
        assert_eq!(render("Acamo @Ecuo"), "조작을 집을 대상으로함.");
    }

    #[test]
    fn causal_templates() {
        assert_eq!(render("A~a'B"), "A하게 되며, 이로 인해 B함.");
        assert_eq!(render("Aca ~sa' Zas"), "행동하고 나서 휴식함.");
    }

    #[test]
    fn sequence_templates() {
        assert_eq!(render("Za en Zas"), "평온/수용 + 휴식함.");
        assert_eq!(render("Za, Zas"), "평온/수용, 휴식함.");
        assert_eq!(render("Aca Ju Aca"), render("Aca, Aca"));
    }

    #[test]
    fn numeric_code_and_vector() {
        assert_eq!(render("Pu3"), "강화(1시간미만/불안정)함.");
        assert_eq!(render("Za2 Mu41"), "평온/수용(30분미만/약간불안)약화(3시간미만/안정)함.");
    }

    #[test]
    fn warning_marker() {
        assert_eq!(render("Ka!"), "충돌/오류 [경고]함.");
    }

    #[test]
    fn property_attachment() {
        assert_eq!(render("Aca eth Ra"), "행동 (성격: 거부/분노)함.");
        assert_eq!(
            render("Aca eth Ra ~a' Ka"),
            "행동 (성격: 거부/분노하게 되며, 이로 인해 충돌/오류)함."
        );
    }

    #[test]
    fn question_keeps_sentence_open() {
        assert_eq!(render("Ym Zaa ?"), "네(청자)가 동의?");
    }

    #[test]
    fn certainty_and_topic_attach() {
        assert_eq!(render("Lam ic"), "기억(확정)함.");
        assert_eq!(render("Lam ic Zas"), "기억(확정)휴식함.");
        assert_eq!(render("Lam R Ecuo"), "기억은 집함.");
        assert_eq!(render("Ecuf R Tp"), "소방서는 과거함.");
    }

    #[test]
    fn bracket_description() {
        assert_eq!(
            render("ImAcapo(Pinrun(move))"),
            "내(화자)가 물리적 행동을 (실행 중(move))함."
        );
    }

    #[test]
    fn groups_keep_brackets() {
        assert_eq!(render("[Aca] ~a' (Zas)"), "[행동]하게 되며, 이로 인해 (휴식)함.");
    }

    #[test]
    fn line_breaks_do_not_change_output() {
        assert_eq!(render("Z\nT1800"), render("Z T1800"));
        assert_eq!(render("Za\n~a' Zas"), "평온/수용하게 되며, 이로 인해 휴식함.");
    }

    #[test]
    fn tag_list_fragments_concatenate() {
        assert_eq!(render("Za Zas"), "평온/수용휴식함.");
        assert_eq!(render("Z T1800"), "현재 상황18시 00분함.");
        assert_eq!(render("Im Acapo"), render("ImAcapo"));
    }

    #[test]
    fn chained_targets() {
        assert_eq!(
            render("{Aca @Uecas @Ecuo}"),
            "{행동 대학교를 대상으로 집을 대상으로}함."
        );
        assert_eq!(
            render("Aca @Uecas @Ecuo"),
            "행동 대학교를 대상으로 집을 대상으로함."
        );
    }

    #[test]
    fn terminate_once() {
        assert_eq!(terminate("끝."), "끝.");
        assert_eq!(terminate("왜?"), "왜?");
        assert_eq!(terminate("행동"), "행동함.");
    }
}
