/// Font Awesome icon class and Tailwind text color for a skill bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconStyle {
    pub icon: &'static str,
    pub color: &'static str,
}

pub const GENERIC_STYLE: IconStyle = IconStyle {
    icon: "fas fa-code",
    color: "text-gray-400",
};

pub const GENERIC_BADGE: &str = "bg-gray-400";

const LANGUAGE_STYLES: &[(&str, IconStyle)] = &[
    ("JavaScript", IconStyle { icon: "fab fa-js-square", color: "text-yellow-400" }),
    ("TypeScript", IconStyle { icon: "fab fa-js-square", color: "text-blue-400" }),
    ("Python", IconStyle { icon: "fab fa-python", color: "text-green-500" }),
    ("Java", IconStyle { icon: "fab fa-java", color: "text-red-500" }),
    ("Go", IconStyle { icon: "fas fa-code", color: "text-blue-500" }),
    ("Ruby", IconStyle { icon: "fab fa-gem", color: "text-red-600" }),
    ("PHP", IconStyle { icon: "fab fa-php", color: "text-purple-500" }),
    ("C", IconStyle { icon: "fas fa-code", color: "text-gray-500" }),
    ("C++", IconStyle { icon: "fas fa-code", color: "text-pink-500" }),
    ("C#", IconStyle { icon: "fas fa-code", color: "text-green-600" }),
    ("HTML", IconStyle { icon: "fab fa-html5", color: "text-orange-500" }),
    ("CSS", IconStyle { icon: "fab fa-css3-alt", color: "text-blue-300" }),
    ("Shell", IconStyle { icon: "fas fa-terminal", color: "text-green-400" }),
    ("Rust", IconStyle { icon: "fas fa-cog", color: "text-orange-600" }),
    ("Swift", IconStyle { icon: "fab fa-swift", color: "text-orange-500" }),
    ("Kotlin", IconStyle { icon: "fas fa-code", color: "text-purple-400" }),
    ("Dart", IconStyle { icon: "fas fa-code", color: "text-blue-300" }),
];

// Badge colors for project cards; includes a few frameworks GitHub reports as languages.
const LANGUAGE_BADGES: &[(&str, &str)] = &[
    ("JavaScript", "bg-yellow-400"),
    ("TypeScript", "bg-blue-400"),
    ("Python", "bg-green-500"),
    ("Java", "bg-red-500"),
    ("Go", "bg-blue-500"),
    ("Ruby", "bg-red-600"),
    ("PHP", "bg-purple-500"),
    ("C", "bg-gray-500"),
    ("C++", "bg-pink-500"),
    ("C#", "bg-green-600"),
    ("HTML", "bg-orange-500"),
    ("CSS", "bg-blue-300"),
    ("Shell", "bg-green-400"),
    ("Rust", "bg-orange-600"),
    ("Swift", "bg-orange-500"),
    ("Kotlin", "bg-purple-400"),
    ("Dart", "bg-blue-300"),
    ("Vue", "bg-green-400"),
    ("React", "bg-blue-400"),
    ("Angular", "bg-red-500"),
];

pub fn language_style(language: &str) -> IconStyle {
    LANGUAGE_STYLES
        .iter()
        .find(|(name, _)| *name == language)
        .map(|(_, style)| *style)
        .unwrap_or(GENERIC_STYLE)
}

pub fn language_badge(language: &str) -> &'static str {
    LANGUAGE_BADGES
        .iter()
        .find(|(name, _)| *name == language)
        .map(|(_, badge)| *badge)
        .unwrap_or(GENERIC_BADGE)
}
