//! Spelling-variant tables for the three sectioned texts. Every variant here was
//! seen in real catalog titles; keep each group next to its canonical label.

/// Declarative description of one sectioning vocabulary. Compiled into a
/// [`super::sections::Vocabulary`] when the rule book is built.
pub struct VocabularySpec {
    pub table: &'static str,
    pub canonical: &'static [&'static str],
    /// Lower-case Latin variants.
    pub aliases: &'static [(&'static str, &'static str)],
    pub native: &'static [(&'static str, &'static str)],
    /// Section keyword that may appear anywhere in the title.
    pub keyword: &'static str,
    /// Section root that must directly follow an alias (fused or spaced).
    pub compound_root: &'static str,
    /// Lower-specificity chapter marker.
    pub marker: Option<&'static str>,
    /// Telugu keyword required before the native table is trusted.
    pub native_keyword: Option<&'static str>,
    /// Telugu section root that must directly follow a native alias.
    pub native_root: &'static str,
}

pub const SKANDHAS: &[&str] = &[
    "Prathama Skandha",
    "Dvitiya Skandha",
    "Tritiya Skandha",
    "Chaturtha Skandha",
    "Panchama Skandha",
    "Shashtha Skandha",
    "Saptama Skandha",
    "Ashtama Skandha",
    "Navama Skandha",
    "Dashama Skandha",
    "Ekadasha Skandha",
    "Dvadasha Skandha",
];

pub const KANDAS: &[&str] = &[
    "Bala Kanda",
    "Ayodhya Kanda",
    "Aranya Kanda",
    "Kishkindha Kanda",
    "Sundara Kanda",
    "Yuddha Kanda",
    "Uttara Kanda",
];

pub const PARVAS: &[&str] = &[
    "Adi Parva",
    "Sabha Parva",
    "Vana Parva",
    "Virata Parva",
    "Udyoga Parva",
    "Bhishma Parva",
    "Drona Parva",
    "Karna Parva",
    "Shalya Parva",
    "Sauptika Parva",
    "Stri Parva",
    "Shanti Parva",
    "Anushasana Parva",
    "Ashvamedhika Parva",
    "Ashramavasika Parva",
    "Mausala Parva",
    "Mahaprasthanika Parva",
    "Svargarohana Parva",
];

pub const SKANDHA: VocabularySpec = VocabularySpec {
    table: "skandha",
    canonical: SKANDHAS,
    aliases: &[
        ("prathama", "Prathama Skandha"),
        ("pradhama", "Prathama Skandha"),
        ("pratham", "Prathama Skandha"),
        ("dvitiya", "Dvitiya Skandha"),
        ("dvitheeya", "Dvitiya Skandha"),
        ("dwitiya", "Dvitiya Skandha"),
        ("dwiteeya", "Dvitiya Skandha"),
        ("dwitewya", "Dvitiya Skandha"),
        ("tritiya", "Tritiya Skandha"),
        ("thritheeya", "Tritiya Skandha"),
        ("tritheeya", "Tritiya Skandha"),
        ("thruteeya", "Tritiya Skandha"),
        ("truteeya", "Tritiya Skandha"),
        ("thrutheeya", "Tritiya Skandha"),
        ("thruteea", "Tritiya Skandha"),
        ("chaturtha", "Chaturtha Skandha"),
        ("chathurdha", "Chaturtha Skandha"),
        ("chathurtha", "Chaturtha Skandha"),
        ("chaturdha", "Chaturtha Skandha"),
        ("chathurda", "Chaturtha Skandha"),
        ("chathrdha", "Chaturtha Skandha"),
        ("chathudha", "Chaturtha Skandha"),
        ("chathurdga", "Chaturtha Skandha"),
        ("chathursha", "Chaturtha Skandha"),
        ("panchama", "Panchama Skandha"),
        ("shashtha", "Shashtha Skandha"),
        ("shashta", "Shashtha Skandha"),
        ("shastama", "Shashtha Skandha"),
        ("shashtama", "Shashtha Skandha"),
        ("saptama", "Saptama Skandha"),
        ("sapthama", "Saptama Skandha"),
        ("saphama", "Saptama Skandha"),
        ("saphtama", "Saptama Skandha"),
        ("saptma", "Saptama Skandha"),
        ("ashtama", "Ashtama Skandha"),
        ("astama", "Ashtama Skandha"),
        ("navama", "Navama Skandha"),
        ("nanama", "Navama Skandha"),
        ("nawama", "Navama Skandha"),
        ("dashama", "Dashama Skandha"),
        ("dasama", "Dashama Skandha"),
        ("dasema", "Dashama Skandha"),
        ("dasma", "Dashama Skandha"),
        ("ekadasha", "Ekadasha Skandha"),
        ("ekaadasa", "Ekadasha Skandha"),
        ("ekaadasha", "Ekadasha Skandha"),
        ("ekaadase", "Ekadasha Skandha"),
        ("ekadasa", "Ekadasha Skandha"),
        ("dvadasha", "Dvadasha Skandha"),
        ("dwaadasa", "Dvadasha Skandha"),
        ("dwaadasha", "Dvadasha Skandha"),
        ("dwadasa", "Dvadasha Skandha"),
    ],
    native: &[
        ("ప్రథమ", "Prathama Skandha"),
        ("ద్వితీయ", "Dvitiya Skandha"),
        ("తృతీయ", "Tritiya Skandha"),
        ("చతుర్థ", "Chaturtha Skandha"),
        ("పంచమ", "Panchama Skandha"),
        ("షష్ఠ", "Shashtha Skandha"),
        ("సప్తమ", "Saptama Skandha"),
        ("అష్టమ", "Ashtama Skandha"),
        ("నవమ", "Navama Skandha"),
        ("దశమ", "Dashama Skandha"),
        ("ఏకాదశ", "Ekadasha Skandha"),
        ("ఏకదసే", "Ekadasha Skandha"),
        ("ద్వాదశ", "Dvadasha Skandha"),
    ],
    keyword: r"schand|skand|స్కంధ",
    compound_root: r"s[ck]h?[aā]+nd",
    marker: Some("sarg"),
    native_keyword: None,
    native_root: r"స్కంధ",
};

pub const KANDA: VocabularySpec = VocabularySpec {
    table: "kanda",
    canonical: KANDAS,
    aliases: &[
        ("bala", "Bala Kanda"),
        ("baala", "Bala Kanda"),
        ("ayodhya", "Ayodhya Kanda"),
        ("ayodhyaa", "Ayodhya Kanda"),
        ("ayodya", "Ayodhya Kanda"),
        ("aranya", "Aranya Kanda"),
        ("aaranya", "Aranya Kanda"),
        ("arany", "Aranya Kanda"),
        ("kishkindha", "Kishkindha Kanda"),
        ("kishkinda", "Kishkindha Kanda"),
        ("kishkindhaa", "Kishkindha Kanda"),
        ("sundara", "Sundara Kanda"),
        ("sundhara", "Sundara Kanda"),
        ("yuddha", "Yuddha Kanda"),
        ("yudhdha", "Yuddha Kanda"),
        ("yudhha", "Yuddha Kanda"),
        ("yudha", "Yuddha Kanda"),
        ("yudda", "Yuddha Kanda"),
        ("udda", "Yuddha Kanda"),
        ("uttara", "Uttara Kanda"),
        ("utthara", "Uttara Kanda"),
        ("uthara", "Uttara Kanda"),
        ("urhara", "Uttara Kanda"),
    ],
    native: &[
        ("బాల", "Bala Kanda"),
        ("అయోధ్య", "Ayodhya Kanda"),
        ("అరణ్య", "Aranya Kanda"),
        ("ఆరణ్య", "Aranya Kanda"),
        ("కిష్కింధ", "Kishkindha Kanda"),
        ("సుందర", "Sundara Kanda"),
        ("యుద్ధ", "Yuddha Kanda"),
        ("ఉత్తర", "Uttara Kanda"),
    ],
    keyword: r"kaand|kand|కాండ",
    compound_root: r"kh?[aā]+nd",
    marker: Some("sarg"),
    native_keyword: Some(r"కాండ|కాం\s*డ|సర్గ"),
    native_root: r"కాండ|కాం\s*డ",
};

pub const PARVA: VocabularySpec = VocabularySpec {
    table: "parva",
    canonical: PARVAS,
    aliases: &[
        ("adi", "Adi Parva"),
        ("aadi", "Adi Parva"),
        ("aadhi", "Adi Parva"),
        ("adhi", "Adi Parva"),
        ("sabha", "Sabha Parva"),
        ("sabhaa", "Sabha Parva"),
        ("vana", "Vana Parva"),
        ("aranya", "Vana Parva"),
        ("aaranya", "Vana Parva"),
        ("virata", "Virata Parva"),
        ("viraata", "Virata Parva"),
        ("udyoga", "Udyoga Parva"),
        ("udhyoga", "Udyoga Parva"),
        ("bhishma", "Bhishma Parva"),
        ("bheeshma", "Bhishma Parva"),
        ("bhiishma", "Bhishma Parva"),
        ("drona", "Drona Parva"),
        ("dhronaa", "Drona Parva"),
        ("dhrona", "Drona Parva"),
        ("karna", "Karna Parva"),
        ("karnaa", "Karna Parva"),
        ("katna", "Karna Parva"),
        ("shalya", "Shalya Parva"),
        ("shalyaa", "Shalya Parva"),
        ("salya", "Shalya Parva"),
        ("shelya", "Shalya Parva"),
        ("sauptika", "Sauptika Parva"),
        ("saupthika", "Sauptika Parva"),
        ("sowpthika", "Sauptika Parva"),
        ("soupthika", "Sauptika Parva"),
        ("souphika", "Sauptika Parva"),
        ("souptika", "Sauptika Parva"),
        ("soupthoka", "Sauptika Parva"),
        ("stri", "Stri Parva"),
        ("sthree", "Stri Parva"),
        ("stree", "Stri Parva"),
        ("saanthi", "Shanti Parva"),
        ("shaanthi", "Shanti Parva"),
        ("shanti", "Shanti Parva"),
        ("santhi", "Shanti Parva"),
        ("saanti", "Shanti Parva"),
        ("santha", "Shanti Parva"),
        ("anushasana", "Anushasana Parva"),
        ("anusaasana", "Anushasana Parva"),
        ("anushaasana", "Anushasana Parva"),
        ("aanusasanika", "Anushasana Parva"),
        ("aanusasinaka", "Anushasana Parva"),
        ("ashvamedhika", "Ashvamedhika Parva"),
        ("aswamedhika", "Ashvamedhika Parva"),
        ("ashwamedha", "Ashvamedhika Parva"),
        ("aswemedha", "Ashvamedhika Parva"),
        ("ashramavasika", "Ashramavasika Parva"),
        ("aashramavasika", "Ashramavasika Parva"),
        ("aasramavasa", "Ashramavasika Parva"),
        ("mausala", "Mausala Parva"),
        ("mowsala", "Mausala Parva"),
        ("mousala", "Mausala Parva"),
        ("mahaprasthanika", "Mahaprasthanika Parva"),
        ("mahaaprasthaanika", "Mahaprasthanika Parva"),
        ("mahaprasthana", "Mahaprasthanika Parva"),
        ("svargarohana", "Svargarohana Parva"),
        ("swargarohana", "Svargarohana Parva"),
        ("swargaarohana", "Svargarohana Parva"),
    ],
    native: &[
        ("ఆది", "Adi Parva"),
        ("సభా", "Sabha Parva"),
        ("సభ", "Sabha Parva"),
        ("వన", "Vana Parva"),
        ("ఆరణ్య", "Vana Parva"),
        ("అరణ్య", "Vana Parva"),
        ("ఆరాన్య", "Vana Parva"),
        ("విరాట", "Virata Parva"),
        ("ఉద్యోగ", "Udyoga Parva"),
        ("భీష్మ", "Bhishma Parva"),
        ("ద్రోణ", "Drona Parva"),
        ("కర్ణ", "Karna Parva"),
        ("శల్య", "Shalya Parva"),
        ("సౌప్తిక", "Sauptika Parva"),
        ("స్త్రీ", "Stri Parva"),
        ("శాంతి", "Shanti Parva"),
        ("శాంథి", "Shanti Parva"),
        ("అనుశాసన", "Anushasana Parva"),
        ("ఆశ్వమేధిక", "Ashvamedhika Parva"),
        ("ఆశ్రమవాసిక", "Ashramavasika Parva"),
        ("మౌసల", "Mausala Parva"),
        ("మహాప్రస్థానిక", "Mahaprasthanika Parva"),
        ("స్వర్గారోహణ", "Svargarohana Parva"),
    ],
    keyword: r"parv|parav|patvam|పర్వ",
    compound_root: r"p[aā]+[rt][aā]*[vw]",
    marker: None,
    native_keyword: Some(r"పర్వ"),
    native_root: r"పర్వ",
};

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn check(spec: &VocabularySpec) {
        let canonical: HashSet<_> = spec.canonical.iter().copied().collect();
        for (alias, label) in spec.aliases.iter().chain(spec.native) {
            assert!(!alias.is_empty(), "{}: empty alias", spec.table);
            assert!(canonical.contains(label), "{}: {alias} -> {label}", spec.table);
        }
        for (alias, _) in spec.aliases {
            assert_eq!(*alias, alias.to_lowercase(), "{}: {alias} not lower-case", spec.table);
        }
    }

    #[test]
    fn skandha_table() {
        check(&SKANDHA);
        assert_eq!(SKANDHAS.len(), 12);
    }

    #[test]
    fn kanda_table() {
        check(&KANDA);
        assert_eq!(KANDAS.len(), 7);
    }

    #[test]
    fn parva_table() {
        check(&PARVA);
        assert_eq!(PARVAS.len(), 18);
    }

    #[test]
    fn every_label_has_a_latin_alias() {
        for spec in [&SKANDHA, &KANDA, &PARVA] {
            for label in spec.canonical {
                assert!(
                    spec.aliases.iter().any(|(_, l)| l == label),
                    "{}: no alias for {label}",
                    spec.table
                );
            }
        }
    }
}
