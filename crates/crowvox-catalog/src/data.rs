//! The fixed catalogue: crow phrases, voice roster, presets

use crate::types::{Crow, Preset, Region, Voice, VoiceGender};

/// Every crow phrase the app can voice, indexed by [`crate::CrowId`].
pub const CROWS: &[Crow] = &[
    Crow {
        lang: "English (UK)",
        flag: "🇬🇧",
        country_code: Some("GB"),
        text: "Cock-a-doodle-doo",
        ipa: "/ˌkɒkəˌduːdl̩ˈduː/",
        region: Region::Europe,
        tts_text: "Cock-a-doodle-doo! Cock-a-doodle-doo!",
    },
    Crow {
        lang: "French",
        flag: "🇫🇷",
        country_code: Some("FR"),
        text: "Cocorico",
        ipa: "/kɔkɔʁiko/",
        region: Region::Europe,
        tts_text: "Cocorico ! Cocorico !",
    },
    Crow {
        lang: "German",
        flag: "🇩🇪",
        country_code: Some("DE"),
        text: "Kikeriki",
        ipa: "/kikəʁiˈkiː/",
        region: Region::Europe,
        tts_text: "Kikeriki! Kikeriki!",
    },
    Crow {
        lang: "Spanish",
        flag: "🇪🇸",
        country_code: Some("ES"),
        text: "Quiquiriquí",
        ipa: "/kikiɾiˈki/",
        region: Region::Europe,
        tts_text: "¡Quiquiriquí! ¡Quiquiriquí!",
    },
    Crow {
        lang: "Italian",
        flag: "🇮🇹",
        country_code: Some("IT"),
        text: "Chicchirichì",
        ipa: "/kikkiriˈki/",
        region: Region::Europe,
        tts_text: "Chicchirichì! Chicchirichì!",
    },
    Crow {
        lang: "Portuguese",
        flag: "🇵🇹",
        country_code: Some("PT"),
        text: "Cocorocó",
        ipa: "/kukuʁuˈkɔ/",
        region: Region::Europe,
        tts_text: "Cocorocó! Cocorocó!",
    },
    Crow {
        lang: "Dutch",
        flag: "🇳🇱",
        country_code: Some("NL"),
        text: "Kukeleku",
        ipa: "/kykələˈky/",
        region: Region::Europe,
        tts_text: "Kukeleku! Kukeleku!",
    },
    Crow {
        lang: "Swedish",
        flag: "🇸🇪",
        country_code: Some("SE"),
        text: "Kuckeliku",
        ipa: "/kɵkɛlɪˈkʉː/",
        region: Region::Europe,
        tts_text: "Kuckeliku! Kuckeliku!",
    },
    Crow {
        lang: "Polish",
        flag: "🇵🇱",
        country_code: Some("PL"),
        text: "Kukuryku",
        ipa: "/kukuˈrɨku/",
        region: Region::Europe,
        tts_text: "Kukuryku! Kukuryku!",
    },
    Crow {
        lang: "Russian",
        flag: "🇷🇺",
        country_code: Some("RU"),
        text: "Кукареку",
        ipa: "/kukɐrʲɪˈku/",
        region: Region::Europe,
        tts_text: "Кукареку! Кукареку!",
    },
    Crow {
        lang: "Greek",
        flag: "🇬🇷",
        country_code: Some("GR"),
        text: "κικιρίκου",
        ipa: "/kikiˈriku/",
        region: Region::Europe,
        tts_text: "κικιρίκου! κικιρίκου!",
    },
    Crow {
        lang: "Romanian",
        flag: "🇷🇴",
        country_code: Some("RO"),
        text: "Cucurigu",
        ipa: "/kukuˈriɡu/",
        region: Region::Europe,
        tts_text: "Cucurigu! Cucurigu!",
    },
    Crow {
        lang: "Hungarian",
        flag: "🇭🇺",
        country_code: Some("HU"),
        text: "Kukurikú",
        ipa: "/ˈkukurikuː/",
        region: Region::Europe,
        tts_text: "Kukurikú! Kukurikú!",
    },
    Crow {
        lang: "Finnish",
        flag: "🇫🇮",
        country_code: Some("FI"),
        text: "Kukkokiekuu",
        ipa: "/ˈkukːoˌkiekuː/",
        region: Region::Europe,
        tts_text: "Kukkokiekuu! Kukkokiekuu!",
    },
    Crow {
        lang: "English (US)",
        flag: "🇺🇸",
        country_code: Some("US"),
        text: "Cock-a-doodle-doo",
        ipa: "/ˌkɑkəˌduːdl̩ˈduː/",
        region: Region::Americas,
        tts_text: "Cock-a-doodle-doo! Cock-a-doodle-doo!",
    },
    Crow {
        lang: "Spanish (Mexico)",
        flag: "🇲🇽",
        country_code: Some("MX"),
        text: "Kikirikí",
        ipa: "/kikiriˈki/",
        region: Region::Americas,
        tts_text: "¡Kikirikí! ¡Kikirikí!",
    },
    Crow {
        lang: "Portuguese (Brazil)",
        flag: "🇧🇷",
        country_code: Some("BR"),
        text: "Cocoricó",
        ipa: "/kokoɾiˈkɔ/",
        region: Region::Americas,
        tts_text: "Cocoricó! Cocoricó!",
    },
    Crow {
        lang: "Japanese",
        flag: "🇯🇵",
        country_code: Some("JP"),
        text: "コケコッコー",
        ipa: "/kokekokːoː/",
        region: Region::Asia,
        tts_text: "コケコッコー！コケコッコー！",
    },
    Crow {
        lang: "Mandarin",
        flag: "🇨🇳",
        country_code: Some("CN"),
        text: "喔喔喔",
        ipa: "/wɔː wɔː wɔː/",
        region: Region::Asia,
        tts_text: "喔喔喔！喔喔喔！",
    },
    Crow {
        lang: "Korean",
        flag: "🇰🇷",
        country_code: Some("KR"),
        text: "꼬끼오",
        ipa: "/k͈ok͈io/",
        region: Region::Asia,
        tts_text: "꼬끼오! 꼬끼오!",
    },
    Crow {
        lang: "Indonesian",
        flag: "🇮🇩",
        country_code: Some("ID"),
        text: "Kukuruyuk",
        ipa: "/kukuruˈjuk/",
        region: Region::Asia,
        tts_text: "Kukuruyuk! Kukuruyuk!",
    },
    Crow {
        lang: "Vietnamese",
        flag: "🇻🇳",
        country_code: Some("VN"),
        text: "Ò ó o",
        ipa: "/ɔ̀ ɔ́ ɔ/",
        region: Region::Asia,
        tts_text: "Ò ó o! Ò ó o!",
    },
    Crow {
        lang: "Filipino",
        flag: "🇵🇭",
        country_code: Some("PH"),
        text: "Tiktilaok",
        ipa: "/tiktilaˈok/",
        region: Region::Asia,
        tts_text: "Tiktilaok! Tiktilaok!",
    },
    Crow {
        lang: "Turkish",
        flag: "🇹🇷",
        country_code: Some("TR"),
        text: "Ü-ürü-üüü",
        ipa: "/yˈyɾyˈyː/",
        region: Region::MiddleEast,
        tts_text: "Ü-ürü-üüü! Ü-ürü-üüü!",
    },
    Crow {
        lang: "Hebrew",
        flag: "🇮🇱",
        country_code: Some("IL"),
        text: "קוקוריקו",
        ipa: "/kukuʁiˈku/",
        region: Region::MiddleEast,
        tts_text: "קוקוריקו! קוקוריקו!",
    },
    Crow {
        lang: "Persian",
        flag: "🇮🇷",
        country_code: Some("IR"),
        text: "قوقولی‌قوقو",
        ipa: "/ɢuɢuliˈɢuɢu/",
        region: Region::MiddleEast,
        tts_text: "قوقولی‌قوقو! قوقولی‌قوقو!",
    },
    Crow {
        lang: "Arabic",
        flag: "🇸🇦",
        country_code: Some("SA"),
        text: "كوكوكوكو",
        ipa: "/kuːkuːkuːkuː/",
        region: Region::MiddleEast,
        tts_text: "كوكوكوكو! كوكوكوكو!",
    },
    Crow {
        lang: "Afrikaans",
        flag: "🇿🇦",
        country_code: Some("ZA"),
        text: "Koekelekoe",
        ipa: "/kukələˈku/",
        region: Region::Africa,
        tts_text: "Koekelekoe! Koekelekoe!",
    },
    Crow {
        lang: "Swahili",
        flag: "🇰🇪",
        country_code: Some("KE"),
        text: "Kokoriko",
        ipa: "/kokoˈriko/",
        region: Region::Africa,
        tts_text: "Kokoriko! Kokoriko!",
    },
];

/// The twelve public ElevenLabs voices the original roster shipped with.
pub const VOICES: &[Voice] = &[
    Voice { id: "21m00Tcm4TlvDq8ikWAM", name: "Rachel", tag: "Expressive", gender: VoiceGender::Female },
    Voice { id: "AZnzlk1XvdvUeBnXmlld", name: "Domi", tag: "Passionate", gender: VoiceGender::Female },
    Voice { id: "EXAVITQu4vr4xnSDxMaL", name: "Bella", tag: "Warm", gender: VoiceGender::Female },
    Voice { id: "ErXwobaYiN019PkySvjV", name: "Antoni", tag: "Balanced", gender: VoiceGender::Male },
    Voice { id: "MF3mGyEYCl7XYWbV9V29", name: "Elli", tag: "Young", gender: VoiceGender::Female },
    Voice { id: "TxGEqnHWrfWFTfGW9XjX", name: "Josh", tag: "Deep", gender: VoiceGender::Male },
    Voice { id: "VR6AewLTigWG4xSOukaG", name: "Arnold", tag: "Crisp", gender: VoiceGender::Male },
    Voice { id: "pNInz6obpgDQGcFmaJgB", name: "Adam", tag: "Narrative", gender: VoiceGender::Male },
    Voice { id: "yoZ06aMxZJJ28mfd3POQ", name: "Sam", tag: "Raspy", gender: VoiceGender::Male },
    Voice { id: "onwK4e9ZLuTAKqWW03F9", name: "Daniel", tag: "Authoritative", gender: VoiceGender::Male },
    Voice { id: "flq6f7yk4E4fJM5XTYuZ", name: "Michael", tag: "Calm", gender: VoiceGender::Male },
    Voice { id: "g5CIjZEefAph4nQFvHAz", name: "Ethan", tag: "Whispery", gender: VoiceGender::Male },
];

/// Voice-setting presets. `similarity_boost` is part of a preset even
/// though the cache fingerprint ignores it; applying a preset clears
/// the cache like any other settings change.
pub const PRESETS: &[Preset] = &[
    Preset { name: "Wild Rooster", icon: "🐓", stability: 0.05, similarity_boost: 0.75, style: 1.0 },
    Preset { name: "Expressive", icon: "🎤", stability: 0.30, similarity_boost: 0.75, style: 1.0 },
    Preset { name: "Balanced", icon: "🎙", stability: 0.50, similarity_boost: 0.80, style: 0.7 },
    Preset { name: "Calm Crow", icon: "🧘", stability: 0.70, similarity_boost: 0.85, style: 0.4 },
    Preset { name: "Max Chaos", icon: "🔥", stability: 0.01, similarity_boost: 0.60, style: 1.0 },
    Preset { name: "Natural", icon: "📻", stability: 0.60, similarity_boost: 0.90, style: 0.5 },
];
