//! Tailwind class tables for the light and dark modes.
//!
//! Backends never branch on darkness themselves; they pick classes from the
//! table handed out by [`Theme::styles`](crate::Theme::styles). The two
//! hero variants carry their own fixed palette.

/// Utility classes for one theme mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Styles {
    pub page_bg: &'static str,
    pub chrome_bar: &'static str,
    pub nav: &'static str,
    pub nav_brand: &'static str,
    pub nav_links: &'static str,
    pub heading: &'static str,
    pub muted: &'static str,
    pub trusted: &'static str,
    pub trusted_caption: &'static str,
    pub trusted_icon: &'static str,
    pub zigzag: &'static str,
    pub list_item: &'static str,
    pub solution_badge: &'static str,
    pub link: &'static str,
    pub features_bg: &'static str,
    pub features_sub: &'static str,
    pub feature_card: &'static str,
    pub feature_icon: &'static str,
    pub social: &'static str,
    pub pricing_bg: &'static str,
    pub plan_card: &'static str,
    pub plan_button: &'static str,
    pub faq_bg: &'static str,
    pub faq_item: &'static str,
    pub faq_icon: &'static str,
    pub cta_panel: &'static str,
    pub footer: &'static str,
}

/// Developer-tool palette.
pub const DARK: Styles = Styles {
    page_bg: "bg-[#0B0F19]",
    chrome_bar: "bg-[#0B0F19] text-slate-400 border-slate-800",
    nav: "bg-[#0B0F19]/80 border-slate-800 text-white",
    nav_brand: "text-white",
    nav_links: "text-slate-300",
    heading: "text-white",
    muted: "text-slate-400",
    trusted: "bg-[#0B0F19] border-slate-800",
    trusted_caption: "text-slate-400",
    trusted_icon: "text-white",
    zigzag: "bg-[#0F1117] text-white",
    list_item: "text-slate-300",
    solution_badge: "bg-blue-500/10 text-blue-400",
    link: "text-blue-400",
    features_bg: "bg-[#0B0F19]",
    features_sub: "text-slate-400",
    feature_card: "bg-slate-900 border-slate-800 hover:border-slate-700",
    feature_icon: "bg-slate-800 text-blue-400",
    social: "bg-[#0F1117] border-slate-800",
    pricing_bg: "bg-slate-900",
    plan_card: "bg-[#0F1117] border border-slate-800 text-white",
    plan_button: "bg-slate-800 hover:bg-slate-700",
    faq_bg: "bg-[#0B0F19]",
    faq_item: "bg-slate-900 hover:bg-slate-800",
    faq_icon: "text-slate-500",
    cta_panel: "bg-blue-900",
    footer: "bg-[#0B0F19] border-slate-800 text-slate-500",
};

/// Modern SaaS palette.
pub const LIGHT: Styles = Styles {
    page_bg: "bg-white",
    chrome_bar: "bg-white text-slate-500 border-gray-200",
    nav: "bg-white/80 border-gray-100 text-slate-900",
    nav_brand: "text-slate-900",
    nav_links: "text-slate-500",
    heading: "text-slate-900",
    muted: "text-slate-600",
    trusted: "bg-white border-gray-100",
    trusted_caption: "text-slate-500",
    trusted_icon: "text-slate-900",
    zigzag: "bg-slate-50 text-slate-900",
    list_item: "text-slate-700",
    solution_badge: "bg-blue-100 text-blue-700",
    link: "text-blue-600",
    features_bg: "bg-white",
    features_sub: "text-slate-500",
    feature_card: "bg-slate-50 border-gray-100 hover:border-blue-200 hover:bg-white",
    feature_icon: "bg-white shadow-sm text-blue-600",
    social: "bg-slate-900 border-gray-100",
    pricing_bg: "bg-slate-50",
    plan_card: "bg-white border border-gray-100 text-slate-900 shadow-xl shadow-slate-200/50",
    plan_button: "bg-slate-100 hover:bg-slate-200 text-slate-900",
    faq_bg: "bg-white",
    faq_item: "bg-slate-50 hover:bg-white border border-transparent hover:border-gray-200",
    faq_icon: "text-slate-400",
    cta_panel: "bg-slate-900",
    footer: "bg-white border-gray-100 text-slate-500",
};

/// Emphasized pricing card, regardless of mode.
pub const POPULAR_PLAN: &str = "bg-slate-900 text-white shadow-2xl ring-4 ring-blue-500/20 scale-105";

/// Button on an emphasized pricing card.
pub const POPULAR_PLAN_BUTTON: &str = "bg-blue-600 hover:bg-blue-500 text-white";

/// Wide bento card in the features grid.
pub const WIDE_CARD: &str = "md:col-span-2";

/// Scroll container for the mobile device frame.
pub const MOBILE_FRAME: &str =
    "w-[375px] h-[750px] border-[12px] border-[#1a1a1a] rounded-[3rem] overflow-y-auto shadow-2xl bg-black";

/// Scroll container for the desktop viewport.
pub const DESKTOP_FRAME: &str = "w-full h-full overflow-y-auto rounded-xl shadow-2xl";
