/// Built-in symbol table.
///
/// Some fragments carry a trailing space so that a fused tag such as
/// `ImAcapo` reads naturally once its parts are concatenated.

pub(crate) const BUILTIN: &[(&str, &str)] = &[
    // Identity
    ("Im", "내(화자)가 "),
    ("Ym", "네(청자)가 "),
    ("Om", "제3자가 "),
    ("Dg", "상급자"),
    ("Suba", "하위 객체"),
    // Lack and relief
    ("Va", "결핍"),
    ("Vab", "육체적 결핍"),
    ("Vam", "정신적 결핍"),
    ("Var", "물리적 결핍"),
    ("Sa", "해소/획득"),
    ("Sab", "육체적 해소"),
    ("Sam", "정신적 해소"),
    ("Sar", "물리적 해소"),
    // Cognition and information
    ("La", "지식"),
    ("Lam", "기억"),
    ("Lai", "정보입력"),
    ("Lac", "추론"),
    ("Lav", "확인완료"),
    ("Lia", "데이터"),
    ("Liad", "수치 데이터"),
    ("Liat", "텍스트 정보"),
    ("Liam", "미디어 정보"),
    // Emotion and mental state
    ("Ra", "거부/분노"),
    ("Rai", "짜증"),
    ("Raf", "공포"),
    ("Ras", "슬픔"),
    ("Za", "평온/수용"),
    ("Zas", "휴식"),
    ("Zaa", "동의"),
    ("Zaf", "충족"),
    ("Fa", "해상도"),
    ("Fam", "집중"),
    ("Ena", "에너지"),
    ("Enab", "활력"),
    ("Mita", "의지"),
    ("Mitam", "도덕"),
    ("Mitat", "의도/목적"),
    ("Mitar", "의욕/사기"),
    ("#Burnout", "번아웃"),
    ("#Flow", "몰입"),
    // Action
    ("Aca", "행동"),
    ("Acapo", "물리적 행동을 "),
    ("Acavo", "언어적 발화를 "),
    ("Acamo", "조작을 "),
    ("Coa", "협력/협동"),
    ("Ata", "조언/지도"),
    ("Ta", "신뢰/유대"),
    ("Exa", "교환/거래"),
    ("Ka", "충돌/오류"),
    ("Pa", "규칙/계약"),
    ("Val", "가치"),
    ("Has", "소유/연결"),
    // Environment and place
    ("Egoc", "장소"),
    ("Egob", "사물"),
    ("Egev", "환경 조건"),
    ("Exi", "시스템"),
    ("Ecuo", "집"),
    ("Ecup", "경찰서"),
    ("Ecuf", "소방서"),
    ("Ecear", "식당"),
    ("Eceaf", "카페"),
    ("Secas", "초등학교"),
    ("Mecas", "중학교"),
    ("Hecas", "고등학교"),
    ("Uecas", "대학교"),
    // Time and slots
    ("Z", "현재 상황"),
    ("T", "시간"),
    ("K", "원인"),
    ("F", "결과/작용"),
    ("N", "가치 판단"),
    ("Tp", "과거"),
    ("Tf", "미래"),
    ("Tn", "현재"),
    ("Tef", "진행형"),
    ("Pinrdy", "대기"),
    ("Pinrun", "실행 중"),
    ("Pinend", "종료"),
    ("Pinhold", "중단"),
    // Certainty, markers and perspective
    ("ic", "확정"),
    ("ec", "가변"),
    ("no", "안 함/아님"),
    ("Ju", "반복"),
    ("R", "은(는)"),
    ("eta", "직관"),
    ("ata", "공감"),
    ("uta", "상상"),
    // Vectors
    ("Pu", "강화"),
    ("Mu", "약화"),
    ("Cu", "반전"),
    ("Xu", "모호"),
    ("Su", "물리적 강화"),
    ("Hu", "기계적 수행"),
    ("Ru", "불규칙"),
    ("Lu", "명확"),
    ("Vu", "불안정"),
];
