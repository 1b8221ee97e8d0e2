//! Message translations
//!
//! Fixed message bundles keyed by ISO language short code. Unknown codes
//! fall back to English.

use crate::config::DEFAULT_LANGUAGE;

/// The set of user-visible message templates for one language
#[derive(Debug, Clone, Copy)]
pub struct Messages {
    pub loading: &'static str,
    pub connect_to: &'static str,
    pub missing_deps_label: &'static str,
    pub missing_deps: &'static str,
}

impl Messages {
    /// Render the "Connect to {host} ({n} tab)" description
    pub fn describe_connection(&self, host: &str, tab_count: u32) -> String {
        self.connect_to
            .replace("{host}", host)
            .replace("{n}", &tab_count.to_string())
    }

    /// Render the missing-dependency detail line
    pub fn describe_missing(&self, missing: &[String]) -> String {
        self.missing_deps.replace("{missing}", &missing.join(","))
    }
}

const BUNDLES: &[(&str, Messages)] = &[
    (
        "en",
        Messages {
            loading: "Loading SSH hosts...",
            connect_to: "Connect to {host} ({n} tab)",
            missing_deps_label: "Missing one or more dependencies",
            missing_deps: "The following dependencies are missing: {missing}",
        },
    ),
    (
        "it",
        Messages {
            loading: "Caricamento host SSH...",
            connect_to: "Connetti a {host} ({n} tab)",
            missing_deps_label: "Mancano una o più dipendenze",
            missing_deps: "Dipendenze mancanti: {missing}",
        },
    ),
    (
        "es",
        Messages {
            loading: "Cargando hosts SSH...",
            connect_to: "Conectar a {host} ({n} pestaña)",
            missing_deps_label: "Falta una o más dependencias",
            missing_deps: "Faltan las siguientes dependencias: {missing}",
        },
    ),
    (
        "fr",
        Messages {
            loading: "Chargement des hôtes SSH...",
            connect_to: "Se connecter à {host} ({n} onglet)",
            missing_deps_label: "Une ou plusieurs dépendances manquantes",
            missing_deps: "Les dépendances suivantes sont manquantes : {missing}",
        },
    ),
    (
        "de",
        Messages {
            loading: "Lade SSH-Hosts...",
            connect_to: "Verbinden mit {host} ({n} Tab)",
            missing_deps_label: "Eine oder mehrere Abhängigkeiten fehlen",
            missing_deps: "Folgende Abhängigkeiten fehlen: {missing}",
        },
    ),
    (
        "pt",
        Messages {
            loading: "Carregando hosts SSH...",
            connect_to: "Conectar a {host} ({n} aba)",
            missing_deps_label: "Uma ou mais dependências ausentes",
            missing_deps: "As seguintes dependências estão ausentes: {missing}",
        },
    ),
    (
        "zh",
        Messages {
            loading: "正在加载 SSH 主机...",
            connect_to: "连接到 {host}（{n} 个标签页）",
            missing_deps_label: "缺少一个或多个依赖项",
            missing_deps: "缺少以下依赖项：{missing}",
        },
    ),
    (
        "ru",
        Messages {
            loading: "Загрузка SSH-хостов...",
            connect_to: "Подключиться к {host} ({n} вкладка)",
            missing_deps_label: "Отсутствует одна или несколько зависимостей",
            missing_deps: "Отсутствуют следующие зависимости: {missing}",
        },
    ),
    (
        "pl",
        Messages {
            loading: "Ładowanie hostów SSH...",
            connect_to: "Połącz z {host} ({n} karta)",
            missing_deps_label: "Brakuje jednej lub więcej zależności",
            missing_deps: "Brakuje następujących zależności: {missing}",
        },
    ),
    (
        "uk",
        Messages {
            loading: "Завантаження SSH-хостів...",
            connect_to: "Підключення до {host} ({n} вкладка)",
            missing_deps_label: "Відсутня одна або кілька залежностей",
            missing_deps: "Відсутні наступні залежності: {missing}",
        },
    ),
    (
        "ja",
        Messages {
            loading: "SSHホストを読み込んでいます...",
            connect_to: "{host} に接続 ({n} タブ)",
            missing_deps_label: "1つ以上の依存関係が見つかりません",
            missing_deps: "次の依存関係が見つかりません: {missing}",
        },
    ),
    (
        "hi",
        Messages {
            loading: "SSH होस्ट लोड हो रहे हैं...",
            connect_to: "{host} से कनेक्ट करें ({n} टैब)",
            missing_deps_label: "एक या अधिक निर्भरताएँ गायब हैं",
            missing_deps: "निम्नलिखित निर्भरताएँ गायब हैं: {missing}",
        },
    ),
    (
        "ar",
        Messages {
            loading: "جارٍ تحميل مضيفي SSH...",
            connect_to: "الاتصال بـ {host} ({n} تبويب)",
            missing_deps_label: "يوجد نقص في اعتماد واحد أو أكثر",
            missing_deps: "الاعتمادات التالية مفقودة: {missing}",
        },
    ),
];

/// Look up the bundle for a language code, falling back to English
pub fn bundle(language: &str) -> &'static Messages {
    BUNDLES
        .iter()
        .find(|(code, _)| *code == language)
        .or_else(|| BUNDLES.iter().find(|(code, _)| *code == DEFAULT_LANGUAGE))
        .map(|(_, messages)| messages)
        .expect("default language bundle exists")
}
