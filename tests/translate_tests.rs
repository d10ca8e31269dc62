/// Translation integration tests — end-to-end input-to-prose scenarios.

use proptest::prelude::*;
use tuacavo::core::render::terminate;
use tuacavo::core::sampler::TagSampler;
use tuacavo::schema::tree::{Expr, SequenceKind};
use tuacavo::{translate, SymbolDictionary, TranslateError, Translator};

#[test]
fn bare_tag_is_terminated() {
    let output = translate("Z").unwrap();
    assert!(output.contains("현재 상황함."));
}

#[test]
fn time_slot_is_decoded() {
    let output = translate("T1800").unwrap();
    assert!(output.contains("18시 00분"));
}

#[test]
fn grouped_statement_with_target() {
    let output = translate("{ImAcapo @Uecas}").unwrap();
    assert!(output.starts_with('{'));
    assert!(output.contains("내(화자)가"));
    assert!(output.contains("대학교를 대상으로"));
    assert!(output.contains('}'));
}

#[test]
fn causal_template() {
    assert_eq!(translate("A~a'B").unwrap(), "A하게 되며, 이로 인해 B함.");
}

#[test]
fn vector_with_numeric_code() {
    assert!(translate("Pu3").unwrap().contains("강화(1시간미만/불안정)"));
}

#[test]
fn fused_tags_with_description_and_target() {
    assert_eq!(
        translate("{ImAcapo(Pinrun(move)) @Uecas}").unwrap(),
        "{내(화자)가 물리적 행동을 (실행 중(move)) 대학교를 대상으로}함."
    );
}

#[test]
fn operator_chain_reads_left_to_right() {
    assert_eq!(
        translate("Aca ~sa' Zas en Za").unwrap(),
        "행동하고 나서 휴식 + 평온/수용함."
    );
}

#[test]
fn repeated_action_is_kept_in_the_tree() {
    let doc = Translator::default().parse("Aca Ju Aca").unwrap();
    assert!(matches!(
        doc.expressions[0],
        Expr::Sequence {
            kind: SequenceKind::Repeated,
            ..
        }
    ));
}

#[test]
fn line_breaks_are_ordinary_whitespace() {
    for (broken, flat) in [
        ("Z\nT1800", "Z T1800"),
        ("Za\n~a' Zas", "Za ~a' Zas"),
        ("Ym\nZaa\n?", "Ym Zaa ?"),
        ("{Aca\n~a' Zas}", "{Aca ~a' Zas}"),
    ] {
        assert_eq!(translate(broken).unwrap(), translate(flat).unwrap(), "input {broken:?}");
    }
    assert_eq!(translate("Za\n~a' Zas").unwrap(), "평온/수용하게 되며, 이로 인해 휴식함.");
}

#[test]
fn tag_list_fragments_join_without_spaces() {
    assert_eq!(translate("Za Zas").unwrap(), "평온/수용휴식함.");
}

#[test]
fn target_with_its_own_target() {
    assert_eq!(
        translate("{Aca @Uecas @Ecuo}").unwrap(),
        "{행동 대학교를 대상으로 집을 대상으로}함."
    );
    assert_eq!(
        translate("Aca @Uecas @Ecuo eth Ra!").unwrap(),
        "행동 대학교를 대상으로 집을 대상으로 (성격: 거부/분노) [경고]함."
    );
}

#[test]
fn warning_follows_the_property() {
    assert_eq!(
        translate("Ka eth Ra!").unwrap(),
        "충돌/오류 (성격: 거부/분노) [경고]함."
    );
    assert!(matches!(translate("Ka! eth Ra"), Err(TranslateError::Syntax(_))));
}

#[test]
fn adjacent_groups_render_on_separate_lines() {
    assert_eq!(translate("{Za} [Zas]").unwrap(), "{평온/수용}함.\n[휴식]함.");
}

#[test]
fn syntax_errors_carry_offsets() {
    for (input, offset) in [("{Za", 3), ("Za }", 3), ("Za ~ Zas", 3), ("", 0)] {
        match translate(input) {
            Err(TranslateError::Syntax(e)) => assert_eq!(e.offset, offset, "input {input:?}"),
            other => panic!("expected syntax error for {input:?}, got {other:?}"),
        }
    }
}

#[test]
fn unknown_tags_pass_through() {
    assert_eq!(translate("Qx").unwrap(), "Qx함.");
}

#[test]
fn builder_overlay_from_fixture() {
    let translator = Translator::builder()
        .dictionary_path("tests/fixtures/overlay.ron")
        .build()
        .unwrap();
    assert_eq!(translator.translate("Qa").unwrap(), "질문함.");
    assert_eq!(translator.translate("Za").unwrap(), "고요함.");
    assert_eq!(translator.translate("Zas").unwrap(), "휴식함.");
}

#[test]
fn translator_shared_across_threads() {
    let translator = std::sync::Arc::new(Translator::default());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let t = std::sync::Arc::clone(&translator);
            std::thread::spawn(move || t.translate("{ImAcapo @Uecas}").unwrap())
        })
        .collect();
    let outputs: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(outputs.windows(2).all(|w| w[0] == w[1]));
}

proptest! {
    #[test]
    fn translation_is_deterministic(input in "[A-Za-z0-9#@{}()\\[\\]~!'?, \\-\n]{0,40}") {
        let a = translate(&input).map_err(|e| e.to_string());
        let b = translate(&input).map_err(|e| e.to_string());
        prop_assert_eq!(a, b);
    }

    #[test]
    fn termination_is_idempotent(line in "[가-힣A-Za-z .?!]{0,20}") {
        let once = terminate(&line);
        prop_assert_eq!(terminate(&once), once.clone());
        prop_assert!(once.ends_with(['.', '?', '!']));
    }

    #[test]
    fn every_line_is_terminated(seed in any::<u64>()) {
        let mut sampler = TagSampler::new(SymbolDictionary::builtin(), seed);
        for sentence in sampler.sentences(5) {
            let output = translate(&sentence).unwrap();
            for line in output.lines() {
                prop_assert!(
                    line.ends_with(['.', '?', '!']),
                    "unterminated line {:?} from {:?}", line, sentence
                );
            }
        }
    }

    #[test]
    fn sampled_sentences_parse(seed in any::<u64>()) {
        let translator = Translator::default();
        let mut sampler = TagSampler::new(translator.dictionary(), seed);
        for sentence in sampler.sentences(10) {
            prop_assert!(translator.parse(&sentence).is_ok(), "failed to parse {:?}", sentence);
        }
    }
}
