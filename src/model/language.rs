use serde::Serialize;

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    pub code: &'static str,
    pub name: &'static str,
}

const fn lang(code: &'static str, name: &'static str) -> Language {
    Language { code, name }
}

/// Destination languages accepted by the translation service, in picker order.
pub const LANGUAGES: &[Language] = &[
    lang("af", "afrikaans"),
    lang("sq", "albanian"),
    lang("am", "amharic"),
    lang("ar", "arabic"),
    lang("hy", "armenian"),
    lang("az", "azerbaijani"),
    lang("eu", "basque"),
    lang("be", "belarusian"),
    lang("bn", "bengali"),
    lang("bs", "bosnian"),
    lang("bg", "bulgarian"),
    lang("ca", "catalan"),
    lang("ceb", "cebuano"),
    lang("ny", "chichewa"),
    lang("zh-cn", "chinese (simplified)"),
    lang("zh-tw", "chinese (traditional)"),
    lang("co", "corsican"),
    lang("hr", "croatian"),
    lang("cs", "czech"),
    lang("da", "danish"),
    lang("nl", "dutch"),
    lang("en", "english"),
    lang("eo", "esperanto"),
    lang("et", "estonian"),
    lang("tl", "filipino"),
    lang("fi", "finnish"),
    lang("fr", "french"),
    lang("fy", "frisian"),
    lang("gl", "galician"),
    lang("ka", "georgian"),
    lang("de", "german"),
    lang("el", "greek"),
    lang("gu", "gujarati"),
    lang("ht", "haitian creole"),
    lang("ha", "hausa"),
    lang("haw", "hawaiian"),
    lang("iw", "hebrew"),
    lang("he", "hebrew"),
    lang("hi", "hindi"),
    lang("hmn", "hmong"),
    lang("hu", "hungarian"),
    lang("is", "icelandic"),
    lang("ig", "igbo"),
    lang("id", "indonesian"),
    lang("ga", "irish"),
    lang("it", "italian"),
    lang("ja", "japanese"),
    lang("jw", "javanese"),
    lang("kn", "kannada"),
    lang("kk", "kazakh"),
    lang("km", "khmer"),
    lang("ko", "korean"),
    lang("ku", "kurdish (kurmanji)"),
    lang("ky", "kyrgyz"),
    lang("lo", "lao"),
    lang("la", "latin"),
    lang("lv", "latvian"),
    lang("lt", "lithuanian"),
    lang("lb", "luxembourgish"),
    lang("mk", "macedonian"),
    lang("mg", "malagasy"),
    lang("ms", "malay"),
    lang("ml", "malayalam"),
    lang("mt", "maltese"),
    lang("mi", "maori"),
    lang("mr", "marathi"),
    lang("mn", "mongolian"),
    lang("my", "myanmar (burmese)"),
    lang("ne", "nepali"),
    lang("no", "norwegian"),
    lang("or", "odia"),
    lang("ps", "pashto"),
    lang("fa", "persian"),
    lang("pl", "polish"),
    lang("pt", "portuguese"),
    lang("pa", "punjabi"),
    lang("ro", "romanian"),
    lang("ru", "russian"),
    lang("sm", "samoan"),
    lang("gd", "scots gaelic"),
    lang("sr", "serbian"),
    lang("st", "sesotho"),
    lang("sn", "shona"),
    lang("sd", "sindhi"),
    lang("si", "sinhala"),
    lang("sk", "slovak"),
    lang("sl", "slovenian"),
    lang("so", "somali"),
    lang("es", "spanish"),
    lang("su", "sundanese"),
    lang("sw", "swahili"),
    lang("sv", "swedish"),
    lang("tg", "tajik"),
    lang("ta", "tamil"),
    lang("te", "telugu"),
    lang("th", "thai"),
    lang("tr", "turkish"),
    lang("uk", "ukrainian"),
    lang("ur", "urdu"),
    lang("ug", "uyghur"),
    lang("uz", "uzbek"),
    lang("vi", "vietnamese"),
    lang("cy", "welsh"),
    lang("xh", "xhosa"),
    lang("yi", "yiddish"),
    lang("yo", "yoruba"),
    lang("zu", "zulu"),
];

/// Codes the service accepts under a different spelling.
const CODE_ALIASES: &[(&str, &str)] = &[("ee", "et")];

/// Resolves a user-chosen destination (code or English name, any case) to the
/// code sent to the service.
pub fn resolve(destination: &str) -> Option<&'static str> {
    let wanted = destination.trim().to_lowercase();
    if wanted.is_empty() {
        return None;
    }

    if let Some(l) = LANGUAGES.iter().find(|l| l.code == wanted) {
        return Some(l.code);
    }

    if let Some(&(_, code)) = CODE_ALIASES.iter().find(|(alias, _)| *alias == wanted) {
        return Some(code);
    }

    // "hebrew" appears twice; the later code wins.
    LANGUAGES
        .iter()
        .rev()
        .find(|l| l.name == wanted)
        .map(|l| l.code)
}
