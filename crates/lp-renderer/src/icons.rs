//! Icon name table.
//!
//! Feature icons arrive as free-form names from the content generator
//! ("Zap", "shield-check", "bar_chart"). They resolve through one explicit
//! table; anything not in it becomes [`Icon::Code`].

/// Known icon symbols.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Icon {
    Accessibility,
    Activity,
    AlertCircle,
    Anchor,
    ArrowRight,
    Award,
    BarChart,
    BarChart2,
    BarChart3,
    Bell,
    Book,
    Bot,
    Box,
    Braces,
    Brain,
    Bug,
    Calendar,
    Camera,
    Check,
    CheckCircle2,
    Chrome,
    Clipboard,
    Clock,
    Cloud,
    Code,
    Codepen,
    Cog,
    Command,
    Compass,
    Cpu,
    CreditCard,
    Database,
    DollarSign,
    Download,
    Eye,
    Feather,
    Figma,
    FileCode,
    FileText,
    Filter,
    Fingerprint,
    Flag,
    Folder,
    Gauge,
    Gift,
    GitBranch,
    Github,
    Globe,
    Hammer,
    HardDrive,
    Hash,
    Heart,
    Home,
    Image,
    Inbox,
    Infinity,
    Key,
    Keyboard,
    Languages,
    Layers,
    Layout,
    Leaf,
    Lightbulb,
    LineChart,
    Link,
    Linkedin,
    ListChecks,
    Lock,
    Mail,
    Map,
    MapPin,
    MessageSquare,
    Monitor,
    Moon,
    MousePointer,
    Network,
    Package,
    Palette,
    PenTool,
    PieChart,
    PlayCircle,
    Plug,
    Plus,
    Puzzle,
    RefreshCw,
    Repeat,
    Rocket,
    Save,
    Scale,
    Search,
    Send,
    Server,
    Settings,
    Share2,
    Shield,
    ShieldCheck,
    ShoppingCart,
    Slack,
    Sliders,
    Smartphone,
    Smile,
    Sparkles,
    Star,
    Sun,
    Target,
    Terminal,
    ThumbsUp,
    Timer,
    Trello,
    TrendingUp,
    Trophy,
    Truck,
    Twitter,
    Unlock,
    Upload,
    Users,
    Wand2,
    Webhook,
    Wifi,
    Workflow,
    Wrench,
    X,
    Zap,
}

/// `(icon, component name, lucide data attribute)`.
const TABLE: &[(Icon, &str, &str)] = &[
    (Icon::Accessibility, "Accessibility", "accessibility"),
    (Icon::Activity, "Activity", "activity"),
    (Icon::AlertCircle, "AlertCircle", "alert-circle"),
    (Icon::Anchor, "Anchor", "anchor"),
    (Icon::ArrowRight, "ArrowRight", "arrow-right"),
    (Icon::Award, "Award", "award"),
    (Icon::BarChart, "BarChart", "bar-chart"),
    (Icon::BarChart2, "BarChart2", "bar-chart-2"),
    (Icon::BarChart3, "BarChart3", "bar-chart-3"),
    (Icon::Bell, "Bell", "bell"),
    (Icon::Book, "Book", "book"),
    (Icon::Bot, "Bot", "bot"),
    (Icon::Box, "Box", "box"),
    (Icon::Braces, "Braces", "braces"),
    (Icon::Brain, "Brain", "brain"),
    (Icon::Bug, "Bug", "bug"),
    (Icon::Calendar, "Calendar", "calendar"),
    (Icon::Camera, "Camera", "camera"),
    (Icon::Check, "Check", "check"),
    (Icon::CheckCircle2, "CheckCircle2", "check-circle-2"),
    (Icon::Chrome, "Chrome", "chrome"),
    (Icon::Clipboard, "Clipboard", "clipboard"),
    (Icon::Clock, "Clock", "clock"),
    (Icon::Cloud, "Cloud", "cloud"),
    (Icon::Code, "Code", "code"),
    (Icon::Codepen, "Codepen", "codepen"),
    (Icon::Cog, "Cog", "cog"),
    (Icon::Command, "Command", "command"),
    (Icon::Compass, "Compass", "compass"),
    (Icon::Cpu, "Cpu", "cpu"),
    (Icon::CreditCard, "CreditCard", "credit-card"),
    (Icon::Database, "Database", "database"),
    (Icon::DollarSign, "DollarSign", "dollar-sign"),
    (Icon::Download, "Download", "download"),
    (Icon::Eye, "Eye", "eye"),
    (Icon::Feather, "Feather", "feather"),
    (Icon::Figma, "Figma", "figma"),
    (Icon::FileCode, "FileCode", "file-code"),
    (Icon::FileText, "FileText", "file-text"),
    (Icon::Filter, "Filter", "filter"),
    (Icon::Fingerprint, "Fingerprint", "fingerprint"),
    (Icon::Flag, "Flag", "flag"),
    (Icon::Folder, "Folder", "folder"),
    (Icon::Gauge, "Gauge", "gauge"),
    (Icon::Gift, "Gift", "gift"),
    (Icon::GitBranch, "GitBranch", "git-branch"),
    (Icon::Github, "Github", "github"),
    (Icon::Globe, "Globe", "globe"),
    (Icon::Hammer, "Hammer", "hammer"),
    (Icon::HardDrive, "HardDrive", "hard-drive"),
    (Icon::Hash, "Hash", "hash"),
    (Icon::Heart, "Heart", "heart"),
    (Icon::Home, "Home", "home"),
    (Icon::Image, "Image", "image"),
    (Icon::Inbox, "Inbox", "inbox"),
    (Icon::Infinity, "Infinity", "infinity"),
    (Icon::Key, "Key", "key"),
    (Icon::Keyboard, "Keyboard", "keyboard"),
    (Icon::Languages, "Languages", "languages"),
    (Icon::Layers, "Layers", "layers"),
    (Icon::Layout, "Layout", "layout"),
    (Icon::Leaf, "Leaf", "leaf"),
    (Icon::Lightbulb, "Lightbulb", "lightbulb"),
    (Icon::LineChart, "LineChart", "line-chart"),
    (Icon::Link, "Link", "link"),
    (Icon::Linkedin, "Linkedin", "linkedin"),
    (Icon::ListChecks, "ListChecks", "list-checks"),
    (Icon::Lock, "Lock", "lock"),
    (Icon::Mail, "Mail", "mail"),
    (Icon::Map, "Map", "map"),
    (Icon::MapPin, "MapPin", "map-pin"),
    (Icon::MessageSquare, "MessageSquare", "message-square"),
    (Icon::Monitor, "Monitor", "monitor"),
    (Icon::Moon, "Moon", "moon"),
    (Icon::MousePointer, "MousePointer", "mouse-pointer"),
    (Icon::Network, "Network", "network"),
    (Icon::Package, "Package", "package"),
    (Icon::Palette, "Palette", "palette"),
    (Icon::PenTool, "PenTool", "pen-tool"),
    (Icon::PieChart, "PieChart", "pie-chart"),
    (Icon::PlayCircle, "PlayCircle", "play-circle"),
    (Icon::Plug, "Plug", "plug"),
    (Icon::Plus, "Plus", "plus"),
    (Icon::Puzzle, "Puzzle", "puzzle"),
    (Icon::RefreshCw, "RefreshCw", "refresh-cw"),
    (Icon::Repeat, "Repeat", "repeat"),
    (Icon::Rocket, "Rocket", "rocket"),
    (Icon::Save, "Save", "save"),
    (Icon::Scale, "Scale", "scale"),
    (Icon::Search, "Search", "search"),
    (Icon::Send, "Send", "send"),
    (Icon::Server, "Server", "server"),
    (Icon::Settings, "Settings", "settings"),
    (Icon::Share2, "Share2", "share-2"),
    (Icon::Shield, "Shield", "shield"),
    (Icon::ShieldCheck, "ShieldCheck", "shield-check"),
    (Icon::ShoppingCart, "ShoppingCart", "shopping-cart"),
    (Icon::Slack, "Slack", "slack"),
    (Icon::Sliders, "Sliders", "sliders"),
    (Icon::Smartphone, "Smartphone", "smartphone"),
    (Icon::Smile, "Smile", "smile"),
    (Icon::Sparkles, "Sparkles", "sparkles"),
    (Icon::Star, "Star", "star"),
    (Icon::Sun, "Sun", "sun"),
    (Icon::Target, "Target", "target"),
    (Icon::Terminal, "Terminal", "terminal"),
    (Icon::ThumbsUp, "ThumbsUp", "thumbs-up"),
    (Icon::Timer, "Timer", "timer"),
    (Icon::Trello, "Trello", "trello"),
    (Icon::TrendingUp, "TrendingUp", "trending-up"),
    (Icon::Trophy, "Trophy", "trophy"),
    (Icon::Truck, "Truck", "truck"),
    (Icon::Twitter, "Twitter", "twitter"),
    (Icon::Unlock, "Unlock", "unlock"),
    (Icon::Upload, "Upload", "upload"),
    (Icon::Users, "Users", "users"),
    (Icon::Wand2, "Wand2", "wand-2"),
    (Icon::Webhook, "Webhook", "webhook"),
    (Icon::Wifi, "Wifi", "wifi"),
    (Icon::Workflow, "Workflow", "workflow"),
    (Icon::Wrench, "Wrench", "wrench"),
    (Icon::X, "X", "x"),
    (Icon::Zap, "Zap", "zap"),
];

impl Icon {
    /// Symbol used for unknown names.
    pub const FALLBACK: Self = Self::Code;

    /// Resolve a free-form icon name.
    ///
    /// Matching ignores case and `-`, `_` and space separators, so
    /// `"ShieldCheck"`, `"shield-check"` and `"shield check"` agree.
    #[must_use]
    pub fn resolve(name: &str) -> Self {
        let key = normalize(name);
        TABLE
            .iter()
            .find(|(_, component, _)| normalize(component) == key)
            .map_or(Self::FALLBACK, |(icon, _, _)| *icon)
    }

    /// Component names of every known icon, in table order.
    ///
    /// This is the closed set offered to the content generator.
    pub fn component_names() -> impl Iterator<Item = &'static str> {
        TABLE.iter().map(|(_, component, _)| *component)
    }

    /// PascalCase component name for the interactive tree.
    #[must_use]
    pub fn component_name(self) -> &'static str {
        self.entry().1
    }

    /// Kebab-case `data-lucide` value for the static page.
    #[must_use]
    pub fn lucide_name(self) -> &'static str {
        self.entry().2
    }

    fn entry(self) -> &'static (Icon, &'static str, &'static str) {
        TABLE
            .iter()
            .find(|(icon, _, _)| *icon == self)
            .unwrap_or(&(Icon::Code, "Code", "code"))
    }
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_pascal_case() {
        assert_eq!(Icon::resolve("Zap"), Icon::Zap);
        assert_eq!(Icon::resolve("ShieldCheck"), Icon::ShieldCheck);
    }

    #[test]
    fn test_resolve_kebab_and_snake() {
        assert_eq!(Icon::resolve("shield-check"), Icon::ShieldCheck);
        assert_eq!(Icon::resolve("bar_chart"), Icon::BarChart);
        assert_eq!(Icon::resolve(" git branch "), Icon::GitBranch);
    }

    #[test]
    fn test_unknown_falls_back_to_code() {
        assert_eq!(Icon::resolve("NotARealIcon"), Icon::Code);
        assert_eq!(Icon::resolve(""), Icon::Code);
    }

    #[test]
    fn test_names() {
        assert_eq!(Icon::CheckCircle2.component_name(), "CheckCircle2");
        assert_eq!(Icon::CheckCircle2.lucide_name(), "check-circle-2");
        assert_eq!(Icon::TrendingUp.lucide_name(), "trending-up");
    }

    #[test]
    fn test_common_lucide_names_resolve() {
        for name in [
            "Clock", "Heart", "Key", "Gauge", "FileText", "Mail", "Download", "Calendar", "Eye",
            "BarChart3",
        ] {
            assert_eq!(Icon::resolve(name).component_name(), name);
        }
        assert_eq!(Icon::BarChart3.lucide_name(), "bar-chart-3");
        assert_eq!(Icon::FileText.lucide_name(), "file-text");
    }

    #[test]
    fn test_component_names_are_unique() {
        let mut names: Vec<_> = Icon::component_names().map(normalize).collect();
        let count = names.len();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), count);
    }

    #[test]
    fn test_table_round_trips_every_entry() {
        for (icon, component, lucide) in TABLE {
            assert_eq!(Icon::resolve(component), *icon);
            assert_eq!(Icon::resolve(lucide), *icon);
        }
    }
}
