//! Backend-agnostic section models.
//!
//! Every presence rule, default text, card emphasis and reveal timing is
//! decided here. Backends only choose markup for the models they receive,
//! so the static page and the interactive preview cannot disagree about
//! which sections exist or in which order they appear.

use lp_content::{ContentDocument, FaqItem, Feature, PricingPlan, ProblemSolution, SocialProof};

use crate::icons::Icon;
use crate::image::AiImage;
use crate::layout::{HeroVariant, Layout, select_layout};
use crate::renderer::RenderOptions;
use crate::reveal::Reveal;
use crate::theme::{Theme, resolve_theme};
use crate::util::{format_thousands, is_filled, or_default};

/// Minimum testimonial length (in characters) for the social proof section.
pub const MIN_TESTIMONIAL_CHARS: usize = 5;

/// In-page navigation link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: [NavLink; 4] = [
    NavLink { label: "Solutions", href: "#problem" },
    NavLink { label: "Product", href: "#features" },
    NavLink { label: "Pricing", href: "#pricing" },
    NavLink { label: "Resources", href: "#faq" },
];

pub const SIGN_IN: &str = "Sign in";

pub const TRUSTED_CAPTION: &str = "Trusted by innovative teams worldwide";
pub const TRUSTED_MARKS: [Icon; 6] = [
    Icon::Trello,
    Icon::Figma,
    Icon::Slack,
    Icon::Github,
    Icon::Chrome,
    Icon::Codepen,
];

pub const RELEASE_BADGE: &str = "New Release v2.0";
pub const DEMO_BUTTON: &str = "View Demo";
pub const INSTALL_BUTTON: &str = "Install SDK";
pub const DOCS_BUTTON: &str = "Read Documentation";
pub const TERMINAL_TITLE: &str = "install.sh";
pub const TERMINAL_PROGRESS: &str = "Installing dependencies...";
pub const TERMINAL_DONE: &str = "Core engine ready";

pub const PROBLEM_BADGE: &str = "The Challenge";
pub const PROBLEM_OVERLAY: &str = "Inefficient manual processes slowing you down.";
pub const PROBLEM_POINTS: [&str; 2] = ["Disconnected systems", "Manual data entry errors"];
pub const SOLUTION_BADGE: &str = "The Solution";
pub const SOLUTION_OVERLAY: &str = "Automated workflows running 24/7.";
pub const SOLUTION_LINK: &str = "Explore the platform";

pub const FEATURES_HEADING: &str = "Everything you need to scale";
pub const FEATURES_SUBHEADING: &str =
    "Powerful features designed for modern teams, packaged in a beautiful interface.";

pub const PRICING_HEADING: &str = "Simple, transparent pricing";
pub const PRICING_SUBHEADING: &str = "No hidden fees. Cancel anytime.";
pub const POPULAR_BADGE: &str = "Most Popular";
pub const PLAN_BLURB: &str = "Perfect for growing teams and startups.";
pub const PLAN_BUTTON: &str = "Get Started";
pub const PRICE_PERIOD: &str = "/mo";

pub const FAQ_HEADING: &str = "Common Questions";

pub const CTA_NOTE: &str = "No credit card required • 14-day free trial";

pub const FOOTER_TAGLINE: &str = "Making work flow better for everyone, everywhere.";
pub const FOOTER_SOCIAL: [Icon; 3] = [Icon::Twitter, Icon::Github, Icon::Linkedin];
pub const FOOTER_COLUMNS: [(&str, &[&str]); 3] = [
    ("Product", &["Features", "Integrations", "Pricing", "Changelog"]),
    ("Company", &["About Us", "Careers", "Blog", "Contact"]),
    ("Legal", &["Privacy Policy", "Terms of Service", "Security"]),
];

/// Everything a backend needs to emit one page.
#[derive(Clone, Debug, PartialEq)]
pub struct PageModel<'a> {
    pub theme: Theme,
    pub layout: Layout,
    /// `meta.title`, possibly empty.
    pub title: &'a str,
    /// `meta.description`, possibly empty.
    pub description: &'a str,
    /// Sections in page order, absent ones already removed.
    pub sections: Vec<Section<'a>>,
}

impl PageModel<'_> {
    /// Whether a section of the given kind is present.
    #[must_use]
    pub fn has(&self, kind: SectionKind) -> bool {
        self.sections.iter().any(|s| s.kind() == kind)
    }
}

/// One page section.
#[derive(Clone, Debug, PartialEq)]
pub enum Section<'a> {
    Navbar(Navbar<'a>),
    Hero(Hero<'a>),
    TrustedBy,
    ProblemSolution(ProblemSolutionBlocks<'a>),
    Features(Features<'a>),
    SocialProof(Testimonial<'a>),
    Pricing(Pricing<'a>),
    Faq(Faq<'a>),
    Cta(Cta<'a>),
    Footer(Footer<'a>),
}

impl Section<'_> {
    #[must_use]
    pub fn kind(&self) -> SectionKind {
        match self {
            Self::Navbar(_) => SectionKind::Navbar,
            Self::Hero(_) => SectionKind::Hero,
            Self::TrustedBy => SectionKind::TrustedBy,
            Self::ProblemSolution(_) => SectionKind::ProblemSolution,
            Self::Features(_) => SectionKind::Features,
            Self::SocialProof(_) => SectionKind::SocialProof,
            Self::Pricing(_) => SectionKind::Pricing,
            Self::Faq(_) => SectionKind::Faq,
            Self::Cta(_) => SectionKind::Cta,
            Self::Footer(_) => SectionKind::Footer,
        }
    }
}

/// Section discriminant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(rename_all = "kebab-case"))]
pub enum SectionKind {
    Navbar,
    Hero,
    TrustedBy,
    ProblemSolution,
    Features,
    SocialProof,
    Pricing,
    Faq,
    Cta,
    Footer,
}

impl SectionKind {
    /// In-page anchor id, for sections the navbar links to.
    #[must_use]
    pub fn anchor(self) -> Option<&'static str> {
        match self {
            Self::ProblemSolution => Some("problem"),
            Self::Features => Some("features"),
            Self::Pricing => Some("pricing"),
            Self::Faq => Some("faq"),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Navbar => "navbar",
            Self::Hero => "hero",
            Self::TrustedBy => "trusted-by",
            Self::ProblemSolution => "problem-solution",
            Self::Features => "features",
            Self::SocialProof => "social-proof",
            Self::Pricing => "pricing",
            Self::Faq => "faq",
            Self::Cta => "cta",
            Self::Footer => "footer",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Navbar<'a> {
    pub brand: &'a str,
    pub button: &'a str,
}

/// Hero copy shared by both variants.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hero<'a> {
    pub variant: HeroVariant,
    pub headline: &'a str,
    pub subheadline: &'a str,
    pub panel: HeroPanel<'a>,
}

impl Hero<'_> {
    /// Reveal timing for the badge, headline, subheadline, buttons and panel.
    #[must_use]
    pub fn reveals(&self) -> [Reveal; 5] {
        let panel = match self.variant {
            HeroVariant::Saas => Reveal::up(400),
            HeroVariant::DevTool => Reveal::right(400),
        };
        [Reveal::up(0), Reveal::up(100), Reveal::up(200), Reveal::up(300), panel]
    }
}

/// Variant-specific hero content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HeroPanel<'a> {
    /// Release badge, trial and demo buttons, dashboard screenshot.
    Saas {
        cta_primary: &'a str,
        dashboard: AiImage,
    },
    /// Star badge, SDK and docs buttons, install terminal.
    DevTool {
        stars: String,
        install_command: String,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProblemSolutionBlocks<'a> {
    pub problem: Option<ProblemBlock<'a>>,
    pub solution: Option<SolutionBlock<'a>>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProblemBlock<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub image: AiImage,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SolutionBlock<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub image: AiImage,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Features<'a> {
    pub cards: Vec<FeatureCard<'a>>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeatureCard<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub icon: Icon,
    /// Spans two grid columns.
    pub wide: bool,
    pub reveal: Reveal,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Testimonial<'a> {
    pub quote: &'a str,
    pub author: &'a str,
    /// Avatar letter.
    pub initial: char,
    /// `"{stat} • {statLabel}"` when either is present.
    pub stat_line: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pricing<'a> {
    pub plans: Vec<PlanCard<'a>>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlanCard<'a> {
    pub name: &'a str,
    pub price: &'a str,
    pub features: &'a [String],
    pub popular: bool,
    pub reveal: Reveal,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Faq<'a> {
    pub items: Vec<FaqEntry<'a>>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FaqEntry<'a> {
    pub question: &'a str,
    pub answer: &'a str,
    pub reveal: Reveal,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cta<'a> {
    pub headline: String,
    pub button: &'a str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Footer<'a> {
    pub brand: &'a str,
    pub copyright: String,
}

/// Resolve theme and layout and build every present section in order.
#[must_use]
pub fn compose_page<'a>(doc: &'a ContentDocument, options: &RenderOptions) -> PageModel<'a> {
    let theme = resolve_theme(&doc.meta);
    let layout = select_layout(&doc.meta.layout_style);

    let mut sections = vec![
        Section::Navbar(navbar(doc)),
        Section::Hero(hero(doc, layout, &theme.accent_color)),
        Section::TrustedBy,
    ];
    let optional = [
        problem_solution(doc.problem_solution.as_ref(), &theme.accent_color).map(Section::ProblemSolution),
        Some(Section::Features(features(&doc.features))),
        social_proof(doc.social_proof.as_ref()).map(Section::SocialProof),
        pricing(&doc.pricing).map(Section::Pricing),
        faq(&doc.faq).map(Section::Faq),
    ];
    for (section, kind) in optional.into_iter().zip([
        SectionKind::ProblemSolution,
        SectionKind::Features,
        SectionKind::SocialProof,
        SectionKind::Pricing,
        SectionKind::Faq,
    ]) {
        match section {
            Some(section) => sections.push(section),
            None => tracing::debug!(section = kind.as_str(), "Section omitted"),
        }
    }
    sections.push(Section::Cta(cta(doc)));
    sections.push(Section::Footer(footer(doc, options.copyright_year)));

    PageModel {
        theme,
        layout,
        title: &doc.meta.title,
        description: &doc.meta.description,
        sections,
    }
}

fn navbar(doc: &ContentDocument) -> Navbar<'_> {
    Navbar {
        brand: or_default(&doc.meta.brand_name, "App"),
        button: or_default(&doc.hero.cta_secondary, "Get Started"),
    }
}

/// Hero for the selected layout. Always present; empty copy stays empty.
#[must_use]
pub fn hero<'a>(doc: &'a ContentDocument, layout: Layout, accent_color: &str) -> Hero<'a> {
    let panel = match layout.hero {
        HeroVariant::Saas => HeroPanel::Saas {
            cta_primary: or_default(&doc.hero.cta_primary, "Start Free Trial"),
            dashboard: AiImage::new(
                format!("clean minimalist saas dashboard ui {accent_color} light mode"),
                "App Dashboard",
            ),
        },
        HeroVariant::DevTool => HeroPanel::DevTool {
            stars: doc
                .github_stats
                .map_or_else(|| "2.4k".to_owned(), |stats| format_thousands(stats.stars)),
            install_command: install_command(&doc.meta.brand_name),
        },
    };
    Hero {
        variant: layout.hero,
        headline: &doc.hero.headline,
        subheadline: &doc.hero.subheadline,
        panel,
    }
}

fn install_command(brand: &str) -> String {
    let scope = if brand.is_empty() { "app".to_owned() } else { brand.to_lowercase() };
    format!("npm install @{scope}/core")
}

/// Problem and solution halves, each gated by its own two fields.
///
/// Returns `None` when all four fields are absent or empty.
#[must_use]
pub fn problem_solution<'a>(
    ps: Option<&'a ProblemSolution>,
    accent_color: &str,
) -> Option<ProblemSolutionBlocks<'a>> {
    let ps = ps?;
    let has_problem = is_filled(ps.problem_title.as_ref()) || is_filled(ps.problem_description.as_ref());
    let has_solution = is_filled(ps.solution_title.as_ref()) || is_filled(ps.solution_description.as_ref());
    if !has_problem && !has_solution {
        return None;
    }

    let problem = has_problem.then(|| ProblemBlock {
        title: or_default(text(ps.problem_title.as_ref()), "The Challenge"),
        description: or_default(
            text(ps.problem_description.as_ref()),
            "Manual operations are prone to error and waste valuable resources.",
        ),
        image: AiImage::new(
            "chaotic messy office paper work stress abstract red tones",
            "Problem visualization",
        ),
    });
    let solution = has_solution.then(|| SolutionBlock {
        title: or_default(text(ps.solution_title.as_ref()), "The Solution"),
        description: or_default(
            text(ps.solution_description.as_ref()),
            "Streamline your operations with our automated platform.",
        ),
        image: AiImage::new(
            format!("organized clean minimalist {accent_color} futuristic ui dashboard layout"),
            "Solution visualization",
        ),
    });
    Some(ProblemSolutionBlocks { problem, solution })
}

fn text(field: Option<&String>) -> &str {
    field.map_or("", String::as_str)
}

/// Whether the feature card at `index` spans two columns.
#[must_use]
pub fn is_wide_card(index: usize) -> bool {
    index == 0 || index == 3
}

/// Feature grid. The container is always present, even with no cards.
#[must_use]
pub fn features(features: &[Feature]) -> Features<'_> {
    let cards = features
        .iter()
        .enumerate()
        .map(|(i, f)| FeatureCard {
            title: &f.title,
            description: &f.description,
            icon: Icon::resolve(&f.icon),
            wide: is_wide_card(i),
            reveal: Reveal::staggered(i, 100),
        })
        .collect();
    Features { cards }
}

/// Testimonial block, present only for a testimonial of at least
/// [`MIN_TESTIMONIAL_CHARS`] characters.
#[must_use]
pub fn social_proof(sp: Option<&SocialProof>) -> Option<Testimonial<'_>> {
    let sp = sp?;
    let quote = sp.testimonial.as_deref()?;
    if quote.chars().count() < MIN_TESTIMONIAL_CHARS {
        return None;
    }
    let author = sp.testimonial_author.as_deref().unwrap_or_default();
    let initial = author
        .chars()
        .next()
        .and_then(|c| c.to_uppercase().next())
        .unwrap_or('U');
    let stat_line = (is_filled(sp.stat.as_ref()) || is_filled(sp.stat_label.as_ref())).then(|| {
        format!(
            "{} • {}",
            sp.stat.as_deref().unwrap_or_default(),
            sp.stat_label.as_deref().unwrap_or_default()
        )
    });
    Some(Testimonial {
        quote,
        author,
        initial,
        stat_line,
    })
}

/// Pricing cards in order. Every plan flagged popular is emphasized.
#[must_use]
pub fn pricing(plans: &[PricingPlan]) -> Option<Pricing<'_>> {
    if plans.is_empty() {
        return None;
    }
    let plans = plans
        .iter()
        .enumerate()
        .map(|(i, p)| PlanCard {
            name: &p.plan_name,
            price: &p.price,
            features: &p.features,
            popular: p.is_popular,
            reveal: Reveal::staggered(i, 150),
        })
        .collect();
    Some(Pricing { plans })
}

/// Questions in order; answers are disclosed on interaction.
#[must_use]
pub fn faq(items: &[FaqItem]) -> Option<Faq<'_>> {
    if items.is_empty() {
        return None;
    }
    let items = items
        .iter()
        .enumerate()
        .map(|(i, item)| FaqEntry {
            question: &item.question,
            answer: &item.answer,
            reveal: Reveal::staggered(i, 50),
        })
        .collect();
    Some(Faq { items })
}

fn cta(doc: &ContentDocument) -> Cta<'_> {
    Cta {
        headline: format!(
            "Start building with {} today.",
            or_default(&doc.meta.brand_name, "us")
        ),
        button: or_default(&doc.hero.cta_primary, "Get Started Now"),
    }
}

fn footer(doc: &ContentDocument, year: i32) -> Footer<'_> {
    let brand = or_default(&doc.meta.brand_name, "App");
    Footer {
        brand,
        copyright: format!("© {year} {brand}. All rights reserved."),
    }
}
