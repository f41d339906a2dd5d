//! Self-contained static HTML page.
//!
//! Mirrors the interactive preview's section markup and Tailwind classes.
//! External styling, icons and fonts are referenced by URL; nothing is
//! bundled. Output depends only on the document and the copyright year.

use std::fmt::Write;

use lp_content::ContentDocument;

use crate::backend::RenderBackend;
use crate::icons::Icon;
use crate::image::AiImage;
use crate::renderer::PageRenderer;
use crate::reveal::{REVEAL_NOSCRIPT, Reveal, reveal_css, reveal_script};
use crate::sections::{
    CTA_NOTE, Cta, DEMO_BUTTON, DOCS_BUTTON, FAQ_HEADING, FEATURES_HEADING, FEATURES_SUBHEADING,
    FOOTER_COLUMNS, FOOTER_SOCIAL, FOOTER_TAGLINE, Faq, Features, Footer, Hero, HeroPanel,
    INSTALL_BUTTON, NAV_LINKS, Navbar, PLAN_BLURB, PLAN_BUTTON, POPULAR_BADGE, PRICE_PERIOD,
    PRICING_HEADING, PRICING_SUBHEADING, PROBLEM_BADGE, PROBLEM_OVERLAY, PROBLEM_POINTS, PageModel,
    Pricing, ProblemSolutionBlocks, RELEASE_BADGE, SIGN_IN, SOLUTION_BADGE, SOLUTION_LINK,
    SOLUTION_OVERLAY, SectionKind, TERMINAL_DONE, TERMINAL_PROGRESS, TERMINAL_TITLE,
    TRUSTED_CAPTION, TRUSTED_MARKS, Testimonial,
};
use crate::styles::{POPULAR_PLAN, POPULAR_PLAN_BUTTON, WIDE_CARD};
use crate::util::{escape_html, or_default};

pub const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";
pub const LUCIDE_CDN: &str = "https://unpkg.com/lucide@latest";
pub const FONTS_URL: &str = "https://fonts.googleapis.com/css2?family=Inter:wght@300;400;500;600;700;800&family=Playfair+Display:wght@400;700&family=JetBrains+Mono:wght@400;500;600&display=swap";

/// Render a document as a complete HTML page.
#[must_use]
pub fn render_static_html(doc: &ContentDocument, copyright_year: i32) -> String {
    PageRenderer::new(StaticBackend::new())
        .with_copyright_year(copyright_year)
        .render(doc)
}

/// Backend producing one HTML document string.
#[derive(Debug, Default)]
pub struct StaticBackend {
    html: String,
}

impl StaticBackend {
    #[must_use]
    pub fn new() -> Self {
        Self {
            html: String::with_capacity(32 * 1024),
        }
    }

    fn open_reveal(&mut self, tag: &str, classes: &str, reveal: Reveal) {
        let _ = write!(
            self.html,
            r#"<{tag} class="reveal reveal-{}"#,
            reveal.direction.as_str()
        );
        if !classes.is_empty() {
            self.html.push(' ');
            self.html.push_str(classes);
        }
        self.html.push('"');
        if reveal.delay_ms > 0 {
            let _ = write!(self.html, r#" style="transition-delay: {}ms""#, reveal.delay_ms);
        }
        self.html.push('>');
    }

    fn icon(&mut self, icon: Icon, classes: &str) {
        let _ = write!(
            self.html,
            r#"<i data-lucide="{}" class="{classes}"></i>"#,
            icon.lucide_name()
        );
    }

    fn image(&mut self, image: &AiImage, classes: &str) {
        let _ = write!(
            self.html,
            r#"<img src="{}" alt="{}" class="{classes}" loading="lazy">"#,
            escape_html(&image.url()),
            escape_html(&image.alt)
        );
    }

    fn section_open(&mut self, kind: SectionKind, classes: &str) {
        match kind.anchor() {
            Some(id) => {
                let _ = write!(self.html, r#"<section id="{id}" class="{classes}">"#);
            }
            None => {
                let _ = write!(self.html, r#"<section class="{classes}">"#);
            }
        }
    }

    fn saas_hero(&mut self, page: &PageModel<'_>, hero: &Hero<'_>, cta_primary: &str, dashboard: &AiImage) {
        let [badge, headline, sub, buttons, panel] = hero.reveals();
        self.html
            .push_str(r#"<section class="relative pt-32 pb-20 overflow-hidden bg-white">"#);
        self.html.push_str(r#"<div class="relative z-10 max-w-6xl mx-auto px-6 text-center">"#);
        self.open_reveal("div", "", badge);
        let _ = write!(
            self.html,
            r#"<div class="inline-flex items-center gap-2 px-3 py-1 rounded-full bg-slate-50 border border-slate-200 text-slate-600 text-xs font-bold uppercase tracking-wide mb-8">{RELEASE_BADGE}</div></div>"#
        );
        self.open_reveal("h1", "text-6xl md:text-8xl font-bold tracking-tighter text-slate-900 mb-8 leading-[1.05]", headline);
        let _ = write!(self.html, "{}</h1>", escape_html(hero.headline));
        self.open_reveal("p", "text-xl md:text-2xl text-slate-500 max-w-3xl mx-auto mb-12 leading-relaxed font-light", sub);
        let _ = write!(self.html, "{}</p>", escape_html(hero.subheadline));
        self.open_reveal("div", "flex flex-col sm:flex-row gap-4 justify-center items-center mb-20", buttons);
        let _ = write!(
            self.html,
            r#"<button class="px-8 py-4 rounded-full text-lg font-bold text-white shadow-2xl shadow-blue-500/20" style="background-color: {}">{}</button>"#,
            page.theme.accent_color,
            escape_html(cta_primary)
        );
        self.html.push_str(r#"<button class="px-8 py-4 rounded-full text-lg font-bold text-slate-700 bg-white border border-slate-200 flex items-center gap-2 shadow-sm">"#);
        self.icon(Icon::PlayCircle, "w-5 h-5");
        let _ = write!(self.html, "{DEMO_BUTTON}</button></div>");
        self.open_reveal("div", "relative mx-auto rounded-2xl p-2 bg-slate-900/5 shadow-2xl ring-1 ring-slate-900/10", panel);
        self.html.push_str(r#"<div class="rounded-xl overflow-hidden bg-white shadow-inner aspect-[16/9] relative">"#);
        self.image(dashboard, "w-full h-full object-cover");
        self.html.push_str(r#"<div class="absolute -bottom-10 -right-10 w-48 h-32 bg-white rounded-lg shadow-xl p-4 hidden md:block"><div class="w-8 h-8 rounded-full bg-green-100 flex items-center justify-center mb-2">"#);
        self.icon(Icon::TrendingUp, "w-4 h-4 text-green-600");
        self.html.push_str("</div></div></div></div></div></section>\n");
    }

    fn dev_tool_hero(&mut self, hero: &Hero<'_>, stars: &str, install_command: &str) {
        let [badge, headline, sub, buttons, panel] = hero.reveals();
        self.html.push_str(r#"<section class="relative pt-32 pb-24 px-6 bg-[#0B0F19] text-white overflow-hidden min-h-[90vh] flex flex-col justify-center">"#);
        self.html.push_str(r#"<div class="relative z-10 max-w-7xl mx-auto grid lg:grid-cols-2 gap-20 items-center"><div>"#);
        self.open_reveal("div", "", badge);
        self.html.push_str(r#"<div class="inline-flex items-center gap-3 px-3 py-1.5 rounded-full border border-slate-700 bg-slate-800/50 text-blue-400 font-mono text-sm mb-8">"#);
        self.icon(Icon::Github, "w-4 h-4");
        let _ = write!(self.html, "<span>{} Stars</span></div></div>", escape_html(stars));
        self.open_reveal("h1", "text-6xl md:text-8xl font-bold tracking-tighter mb-8 leading-none bg-clip-text text-transparent bg-gradient-to-br from-white via-white to-slate-500", headline);
        let _ = write!(self.html, "{}</h1>", escape_html(hero.headline));
        self.open_reveal("p", "text-xl text-slate-400 mb-10 leading-relaxed max-w-lg font-light", sub);
        let _ = write!(self.html, "{}</p>", escape_html(hero.subheadline));
        self.open_reveal("div", "flex flex-col sm:flex-row gap-4", buttons);
        self.html.push_str(r#"<button class="h-14 px-8 rounded-full bg-white text-slate-900 font-bold flex items-center justify-center gap-2">"#);
        self.icon(Icon::Terminal, "w-5 h-5");
        let _ = write!(
            self.html,
            r#"{INSTALL_BUTTON}</button><button class="h-14 px-8 rounded-full border border-slate-700 text-slate-300 font-medium bg-slate-900/50">{DOCS_BUTTON}</button></div></div>"#
        );
        self.open_reveal("div", "relative", panel);
        let _ = write!(
            self.html,
            r#"<div class="relative bg-[#0F1117] rounded-xl border border-slate-800 shadow-2xl overflow-hidden"><div class="flex items-center justify-between px-4 py-3 border-b border-slate-800"><div class="flex gap-2"><div class="w-3 h-3 rounded-full bg-red-500/20 border border-red-500/50"></div><div class="w-3 h-3 rounded-full bg-yellow-500/20 border border-yellow-500/50"></div><div class="w-3 h-3 rounded-full bg-green-500/20 border border-green-500/50"></div></div><div class="text-xs text-slate-500 font-mono">{TERMINAL_TITLE}</div></div>"#
        );
        let _ = write!(
            self.html,
            r#"<div class="p-6 font-mono text-sm overflow-x-auto text-slate-300"><div class="flex"><span class="text-blue-400 mr-4">$</span> <span>{}</span></div><div class="flex text-slate-500 mt-2"><span class="mr-4"> </span> <span>{TERMINAL_PROGRESS}</span></div><div class="flex text-green-400 mt-2"><span class="mr-4">&#10004;</span> <span>{TERMINAL_DONE}</span></div><div class="flex mt-4"><span class="text-blue-400 mr-4">$</span> <span class="animate-pulse">_</span></div></div>"#,
            escape_html(install_command)
        );
        self.html.push_str("</div></div></div></section>\n");
    }
}

impl RenderBackend for StaticBackend {
    type Output = String;

    fn begin_page(&mut self, page: &PageModel<'_>) {
        let theme = &page.theme;
        let html_class = if theme.is_dark { "dark scroll-smooth" } else { "scroll-smooth" };
        let _ = write!(self.html, "<!DOCTYPE html>\n<html lang=\"en\" class=\"{html_class}\">\n<head>\n");
        self.html.push_str("<meta charset=\"UTF-8\">\n");
        self.html
            .push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
        let _ = writeln!(
            self.html,
            "<title>{}</title>",
            escape_html(or_default(page.title, "Landing Page"))
        );
        let _ = writeln!(
            self.html,
            "<meta name=\"description\" content=\"{}\">",
            escape_html(page.description)
        );
        let _ = writeln!(self.html, "<meta name=\"theme-color\" content=\"{}\">", theme.accent_color);
        let _ = writeln!(self.html, "<script src=\"{TAILWIND_CDN}\"></script>");
        let _ = writeln!(self.html, "<script src=\"{LUCIDE_CDN}\"></script>");
        let _ = writeln!(self.html, "<link rel=\"preconnect\" href=\"https://fonts.googleapis.com\">");
        let _ = writeln!(self.html, "<link rel=\"stylesheet\" href=\"{}\">", escape_html(FONTS_URL));

        self.html.push_str("<style>\n");
        let _ = writeln!(self.html, ":root {{ --lp-primary: {}; }}", theme.accent_color);
        let _ = writeln!(self.html, "body {{ font-family: {}; }}", theme.font.css_stack());
        self.html.push_str(".font-sans { font-family: 'Inter', sans-serif; }\n");
        self.html.push_str(".font-serif { font-family: 'Playfair Display', serif; }\n");
        self.html.push_str(".font-mono { font-family: 'JetBrains Mono', monospace; }\n");
        self.html.push_str(".faq-answer { display: none; }\n");
        self.html.push_str(
            ".faq-item:hover .faq-answer, .faq-item:focus-within .faq-answer { display: block; }\n",
        );
        self.html.push_str(".faq-item:hover .faq-icon, .faq-item:focus-within .faq-icon { transform: rotate(45deg); }\n");
        self.html.push_str(&reveal_css());
        self.html.push_str("</style>\n");
        self.html.push_str(REVEAL_NOSCRIPT);
        self.html.push('\n');

        self.html.push_str("<script>\n");
        let _ = writeln!(
            self.html,
            "tailwind.config = {{ darkMode: 'class', theme: {{ extend: {{ colors: {{ primary: '{}' }} }} }} }};",
            theme.accent_color
        );
        self.html.push_str("</script>\n</head>\n");
        let _ = writeln!(
            self.html,
            "<body class=\"{} {} antialiased {}\">",
            theme.styles().page_bg,
            if theme.is_dark { "text-white" } else { "text-slate-900" },
            theme.font.class()
        );
    }

    fn navbar(&mut self, page: &PageModel<'_>, navbar: &Navbar<'_>) {
        let styles = page.theme.styles();
        let _ = write!(
            self.html,
            r#"<nav class="sticky top-0 z-40 backdrop-blur-xl border-b {}"><div class="max-w-7xl mx-auto px-6 py-5 flex items-center justify-between">"#,
            styles.nav
        );
        let _ = write!(
            self.html,
            r#"<div class="font-bold text-xl flex items-center gap-2 tracking-tighter"><div class="p-1.5 rounded-lg text-white shadow-lg" style="background-color: {}">"#,
            page.theme.accent_color
        );
        self.icon(Icon::Box, "w-5 h-5");
        let _ = write!(
            self.html,
            r#"</div><span class="{}">{}</span></div>"#,
            styles.nav_brand,
            escape_html(navbar.brand)
        );
        let _ = write!(
            self.html,
            r#"<div class="hidden md:flex gap-8 text-sm font-medium {}">"#,
            styles.nav_links
        );
        for link in NAV_LINKS {
            let _ = write!(
                self.html,
                r#"<a href="{}" class="hover:text-primary transition-colors">{}</a>"#,
                link.href, link.label
            );
        }
        let _ = write!(
            self.html,
            r#"</div><div class="flex gap-4 items-center"><button class="hidden sm:block text-sm font-medium {}">{SIGN_IN}</button>"#,
            styles.nav_links
        );
        let _ = write!(
            self.html,
            r#"<button class="px-5 py-2.5 rounded-full text-sm font-semibold text-white shadow-xl" style="background-color: {}">{}</button></div></div></nav>"#,
            page.theme.accent_color,
            escape_html(navbar.button)
        );
        self.html.push('\n');
    }

    fn hero(&mut self, page: &PageModel<'_>, hero: &Hero<'_>) {
        match &hero.panel {
            HeroPanel::Saas { cta_primary, dashboard } => {
                self.saas_hero(page, hero, cta_primary, dashboard);
            }
            HeroPanel::DevTool {
                stars,
                install_command,
            } => self.dev_tool_hero(hero, stars, install_command),
        }
    }

    fn trusted_by(&mut self, page: &PageModel<'_>) {
        let styles = page.theme.styles();
        let _ = write!(
            self.html,
            r#"<div class="py-12 border-b {}"><p class="text-center text-xs font-bold uppercase tracking-widest mb-8 opacity-40 {}">{TRUSTED_CAPTION}</p><div class="flex justify-center flex-wrap gap-12 opacity-30 grayscale px-6">"#,
            styles.trusted, styles.trusted_caption
        );
        let icon_class = format!("w-8 h-8 {}", styles.trusted_icon);
        for mark in TRUSTED_MARKS {
            self.icon(mark, &icon_class);
        }
        self.html.push_str("</div></div>\n");
    }

    fn problem_solution(&mut self, page: &PageModel<'_>, blocks: &ProblemSolutionBlocks<'_>) {
        let styles = page.theme.styles();
        let _ = write!(
            self.html,
            r#"<div id="problem" class="py-32 px-6 overflow-hidden {}"><div class="max-w-7xl mx-auto space-y-32">"#,
            styles.zigzag
        );

        if let Some(problem) = &blocks.problem {
            self.html.push_str(r#"<div class="grid lg:grid-cols-2 gap-16 items-center">"#);
            self.open_reveal("div", "", Reveal::left(0));
            self.html.push_str(r#"<div class="relative aspect-square md:aspect-[4/3] rounded-3xl overflow-hidden shadow-2xl">"#);
            self.image(&problem.image, "w-full h-full object-cover opacity-90");
            self.html.push_str(r#"<div class="absolute bottom-8 left-8 bg-white/90 backdrop-blur p-4 rounded-xl shadow-lg max-w-xs"><div class="flex items-center gap-3 text-red-600 font-bold mb-1">"#);
            self.icon(Icon::AlertCircle, "w-5 h-5");
            let _ = write!(
                self.html,
                r#"<span>{PROBLEM_BADGE}</span></div><p class="text-slate-600 text-sm">{PROBLEM_OVERLAY}</p></div></div></div>"#
            );
            self.open_reveal("div", "space-y-6", Reveal::up(0));
            let _ = write!(
                self.html,
                r#"<h2 class="text-4xl md:text-5xl font-bold leading-tight tracking-tight">{}</h2><p class="text-xl leading-relaxed font-light {}">{}</p><div class="pl-6 border-l-4 border-red-500/30 space-y-4">"#,
                escape_html(problem.title),
                styles.muted,
                escape_html(problem.description)
            );
            for point in PROBLEM_POINTS {
                self.html.push_str(r#"<div class="flex items-center gap-3">"#);
                self.icon(Icon::X, "w-5 h-5 text-red-500");
                let _ = write!(self.html, r#"<span class="{}">{point}</span></div>"#, styles.list_item);
            }
            self.html.push_str("</div></div></div>");
        }

        if let Some(solution) = &blocks.solution {
            self.html.push_str(r#"<div class="grid lg:grid-cols-2 gap-16 items-center">"#);
            self.open_reveal("div", "lg:order-2", Reveal::right(0));
            self.html.push_str(r#"<div class="relative aspect-square md:aspect-[4/3] rounded-3xl overflow-hidden shadow-2xl ring-1 ring-slate-900/5">"#);
            self.image(&solution.image, "w-full h-full object-cover");
            self.html.push_str(r#"<div class="absolute top-8 right-8 bg-white/90 backdrop-blur p-4 rounded-xl shadow-lg max-w-xs"><div class="flex items-center gap-3 text-green-600 font-bold mb-1">"#);
            self.icon(Icon::CheckCircle2, "w-5 h-5");
            let _ = write!(
                self.html,
                r#"<span>{SOLUTION_BADGE}</span></div><p class="text-slate-600 text-sm">{SOLUTION_OVERLAY}</p></div></div></div>"#
            );
            self.open_reveal("div", "lg:order-1 space-y-6", Reveal::up(0));
            let _ = write!(
                self.html,
                r#"<div class="inline-flex items-center gap-2 px-3 py-1 rounded-full text-xs font-bold uppercase tracking-wide mb-2 {}">"#,
                styles.solution_badge
            );
            self.icon(Icon::Sparkles, "w-3 h-3");
            let _ = write!(
                self.html,
                r#"{SOLUTION_BADGE}</div><h2 class="text-4xl md:text-5xl font-bold leading-tight tracking-tight">{}</h2><p class="text-xl leading-relaxed font-light {}">{}</p>"#,
                escape_html(solution.title),
                styles.muted,
                escape_html(solution.description)
            );
            let _ = write!(
                self.html,
                r#"<a href="{}" class="mt-4 flex items-center gap-2 font-semibold {}"><span>{SOLUTION_LINK}</span>"#,
                "#features",
                styles.link
            );
            self.icon(Icon::ArrowRight, "w-4 h-4");
            self.html.push_str("</a></div></div>");
        }

        self.html.push_str("</div></div>\n");
    }

    fn features(&mut self, page: &PageModel<'_>, features: &Features<'_>) {
        let styles = page.theme.styles();
        self.section_open(SectionKind::Features, &format!("py-32 px-6 {}", styles.features_bg));
        self.html.push_str(r#"<div class="max-w-7xl mx-auto">"#);
        self.open_reveal("div", "text-center max-w-3xl mx-auto mb-20", Reveal::up(0));
        let _ = write!(
            self.html,
            r#"<h2 class="text-4xl md:text-5xl font-bold mb-6 tracking-tight {}">{FEATURES_HEADING}</h2><p class="text-xl {}">{FEATURES_SUBHEADING}</p></div>"#,
            styles.heading, styles.features_sub
        );
        self.html.push_str(r#"<div class="grid md:grid-cols-3 gap-6 auto-rows-[300px]">"#);
        for card in &features.cards {
            let classes = if card.wide { format!("h-full {WIDE_CARD}") } else { "h-full".to_owned() };
            self.open_reveal("div", &classes, card.reveal);
            let _ = write!(
                self.html,
                r#"<div class="feature-card group relative h-full rounded-3xl p-8 overflow-hidden border {}"><div class="relative z-10 flex flex-col h-full"><div class="w-12 h-12 rounded-2xl flex items-center justify-center mb-6 text-2xl {}">"#,
                styles.feature_card, styles.feature_icon
            );
            self.icon(card.icon, "");
            let _ = write!(
                self.html,
                r#"</div><h3 class="text-2xl font-bold mb-3 {}">{}</h3><p class="leading-relaxed {}">{}</p></div></div></div>"#,
                styles.heading,
                escape_html(card.title),
                styles.muted,
                escape_html(card.description)
            );
        }
        self.html.push_str("</div></div></section>\n");
    }

    fn social_proof(&mut self, page: &PageModel<'_>, testimonial: &Testimonial<'_>) {
        let _ = write!(
            self.html,
            r#"<section class="py-32 px-6 border-y relative overflow-hidden {}"><div class="relative z-10 max-w-5xl mx-auto text-center">"#,
            page.theme.styles().social
        );
        self.open_reveal("div", "", Reveal::up(0));
        self.html.push_str(r#"<div class="flex justify-center mb-8 text-yellow-400 gap-1">"#);
        for _ in 0..5 {
            self.icon(Icon::Star, "w-6 h-6 fill-current");
        }
        let _ = write!(
            self.html,
            r#"</div><blockquote class="text-3xl md:text-5xl font-medium leading-tight text-white mb-10">&quot;{}&quot;</blockquote>"#,
            escape_html(testimonial.quote)
        );
        let _ = write!(
            self.html,
            r#"<div class="flex flex-col items-center"><div class="w-16 h-16 rounded-full bg-gradient-to-tr from-blue-400 to-purple-500 p-[2px] mb-4"><div class="w-full h-full rounded-full bg-slate-900 flex items-center justify-center text-xl font-bold text-white uppercase">{}</div></div><div class="text-white font-bold text-lg">{}</div>"#,
            escape_html(&testimonial.initial.to_string()),
            escape_html(testimonial.author)
        );
        if let Some(stat_line) = &testimonial.stat_line {
            let _ = write!(self.html, r#"<div class="text-slate-400 mt-2">{}</div>"#, escape_html(stat_line));
        }
        self.html.push_str("</div></div></div></section>\n");
    }

    fn pricing(&mut self, page: &PageModel<'_>, pricing: &Pricing<'_>) {
        let styles = page.theme.styles();
        self.section_open(SectionKind::Pricing, &format!("py-32 px-6 {}", styles.pricing_bg));
        self.html.push_str(r#"<div class="max-w-7xl mx-auto">"#);
        self.open_reveal("div", "text-center mb-20", Reveal::up(0));
        let _ = write!(
            self.html,
            r#"<h2 class="text-4xl font-bold mb-4 tracking-tight {}">{PRICING_HEADING}</h2><p class="{}">{PRICING_SUBHEADING}</p></div>"#,
            styles.heading, styles.muted
        );
        self.html.push_str(r#"<div class="grid md:grid-cols-3 gap-8 items-start">"#);
        for plan in &pricing.plans {
            self.open_reveal("div", "h-full", plan.reveal);
            let (card, button, check) = if plan.popular {
                (POPULAR_PLAN, POPULAR_PLAN_BUTTON, "text-blue-400")
            } else {
                (styles.plan_card, styles.plan_button, "text-green-500")
            };
            let _ = write!(
                self.html,
                r#"<div class="relative p-10 rounded-3xl h-full flex flex-col {card}">"#
            );
            if plan.popular {
                let _ = write!(
                    self.html,
                    r#"<div class="absolute -top-4 left-1/2 -translate-x-1/2 px-4 py-1 bg-blue-600 text-white text-xs font-bold rounded-full uppercase tracking-wide">{POPULAR_BADGE}</div>"#
                );
            }
            let _ = write!(
                self.html,
                r#"<h3 class="text-xl font-bold mb-2 opacity-80">{}</h3><div class="text-5xl font-bold mb-6 tracking-tight">{}<span class="text-lg font-normal opacity-50">{PRICE_PERIOD}</span></div><p class="text-sm opacity-60 mb-8 pb-8 border-b border-gray-200/10">{PLAN_BLURB}</p><ul class="space-y-4 mb-8 flex-1">"#,
                escape_html(plan.name),
                escape_html(plan.price)
            );
            let check_class = format!("w-5 h-5 shrink-0 {check}");
            for feature in plan.features {
                self.html.push_str(r#"<li class="flex items-start gap-3 text-sm">"#);
                self.icon(Icon::Check, &check_class);
                let _ = write!(self.html, r#"<span class="opacity-80">{}</span></li>"#, escape_html(feature));
            }
            let _ = write!(
                self.html,
                r#"</ul><button class="w-full py-4 rounded-xl font-bold {button}">{PLAN_BUTTON}</button></div></div>"#
            );
        }
        self.html.push_str("</div></div></section>\n");
    }

    fn faq(&mut self, page: &PageModel<'_>, faq: &Faq<'_>) {
        let styles = page.theme.styles();
        self.section_open(SectionKind::Faq, &format!("py-32 px-6 {}", styles.faq_bg));
        self.html.push_str(r#"<div class="max-w-3xl mx-auto">"#);
        self.open_reveal("h2", &format!("text-3xl font-bold mb-16 text-center tracking-tight {}", styles.heading), Reveal::up(0));
        let _ = write!(self.html, r#"{FAQ_HEADING}</h2><div class="space-y-4">"#);
        let icon_class = format!("faq-icon w-5 h-5 transition-transform {}", styles.faq_icon);
        for item in &faq.items {
            self.open_reveal("div", "", item.reveal);
            let _ = write!(
                self.html,
                r#"<div class="faq-item p-6 rounded-2xl cursor-pointer {}" tabindex="0"><div class="flex justify-between items-center mb-2"><h4 class="font-bold text-lg {}">{}</h4>"#,
                styles.faq_item,
                styles.heading,
                escape_html(item.question)
            );
            self.icon(Icon::Plus, &icon_class);
            let _ = write!(
                self.html,
                r#"</div><p class="faq-answer mt-2 {}">{}</p></div></div>"#,
                styles.muted,
                escape_html(item.answer)
            );
        }
        self.html.push_str("</div></div></section>\n");
    }

    fn cta(&mut self, page: &PageModel<'_>, cta: &Cta<'_>) {
        let _ = write!(
            self.html,
            r#"<section class="py-24 px-6"><div class="max-w-5xl mx-auto rounded-[3rem] p-12 md:p-24 text-center relative overflow-hidden {}"><div class="absolute top-0 left-0 w-full h-full opacity-30 pointer-events-none"><div class="absolute top-[-50%] left-[-50%] w-[1000px] h-[1000px] bg-blue-500 rounded-full blur-[150px]"></div></div>"#,
            page.theme.styles().cta_panel
        );
        self.open_reveal("div", "relative z-10", Reveal::up(0));
        let _ = write!(
            self.html,
            r#"<h2 class="text-4xl md:text-6xl font-bold mb-8 text-white tracking-tight">{}</h2><div class="flex flex-col sm:flex-row gap-4 justify-center"><button class="px-10 py-5 rounded-full text-xl font-bold text-slate-900 bg-white shadow-xl">{}</button></div><p class="mt-8 text-slate-400 text-sm">{}</p>"#,
            escape_html(&cta.headline),
            escape_html(cta.button),
            escape_html(CTA_NOTE)
        );
        self.html.push_str("</div></div></section>\n");
    }

    fn footer(&mut self, page: &PageModel<'_>, footer: &Footer<'_>) {
        let styles = page.theme.styles();
        let _ = write!(
            self.html,
            r#"<footer class="py-20 px-6 border-t {}"><div class="max-w-7xl mx-auto grid md:grid-cols-4 gap-12 mb-12 text-sm"><div><div class="font-bold text-xl mb-4 flex items-center gap-2 {}">"#,
            styles.footer, styles.heading
        );
        self.icon(Icon::Box, "w-6 h-6 text-blue-500");
        let _ = write!(
            self.html,
            r#"{}</div><p class="mb-4">{FOOTER_TAGLINE}</p><div class="flex gap-4">"#,
            escape_html(footer.brand)
        );
        for icon in FOOTER_SOCIAL {
            self.icon(icon, "w-5 h-5");
        }
        self.html.push_str("</div></div>");
        for (heading, links) in FOOTER_COLUMNS {
            let _ = write!(
                self.html,
                r#"<div><h4 class="font-bold mb-4 {}">{heading}</h4><ul class="space-y-2">"#,
                styles.heading
            );
            for link in links {
                let _ = write!(self.html, "<li>{link}</li>");
            }
            self.html.push_str("</ul></div>");
        }
        let copyright = escape_html(&footer.copyright).replacen('©', "&copy;", 1);
        let _ = write!(
            self.html,
            r#"</div><div class="max-w-7xl mx-auto pt-8 border-t border-gray-200/10 text-center"><p>{copyright}</p></div></footer>"#
        );
        self.html.push('\n');
    }

    fn finish(mut self, _page: &PageModel<'_>) -> String {
        self.html.push_str("<script>\nlucide.createIcons();\n");
        self.html.push_str(&reveal_script());
        self.html.push_str("\n</script>\n</body>\n</html>\n");
        self.html
    }
}

#[cfg(test)]
mod tests {
    use lp_content::{
        FaqItem, Feature, Hero as HeroCopy, Meta, PricingPlan, ProblemSolution, RepoStats, SocialProof,
    };

    use super::*;

    fn base(layout: &str) -> ContentDocument {
        ContentDocument {
            meta: Meta {
                brand_name: "Acme".to_owned(),
                title: "Acme | Ship faster".to_owned(),
                description: "Deploy in seconds".to_owned(),
                theme_color: "#3b82f6".to_owned(),
                font_pairing: "sans".to_owned(),
                layout_style: layout.to_owned(),
            },
            hero: HeroCopy {
                headline: "Ship faster".to_owned(),
                subheadline: "From commit to cloud".to_owned(),
                cta_primary: "Try it".to_owned(),
                cta_secondary: "Sign up".to_owned(),
                image_prompt: String::new(),
            },
            ..ContentDocument::default()
        }
    }

    fn full(layout: &str) -> ContentDocument {
        let mut doc = base(layout);
        doc.problem_solution = Some(ProblemSolution {
            problem_title: Some("Deploys are slow".to_owned()),
            problem_description: Some("Hours of waiting".to_owned()),
            solution_title: Some("One command".to_owned()),
            solution_description: Some("Push and forget".to_owned()),
        });
        doc.features = (0..4)
            .map(|i| Feature {
                title: format!("Feature {i}"),
                description: "Does things".to_owned(),
                icon: "ShieldCheck".to_owned(),
            })
            .collect();
        doc.social_proof = Some(SocialProof {
            stat: Some("99%".to_owned()),
            stat_label: Some("uptime".to_owned()),
            testimonial: Some("Best tool we adopted".to_owned()),
            testimonial_author: Some("sam".to_owned()),
        });
        doc.pricing = vec![
            PricingPlan {
                plan_name: "Hobby".to_owned(),
                price: "$0".to_owned(),
                features: vec!["1 project".to_owned()],
                is_popular: false,
            },
            PricingPlan {
                plan_name: "Pro".to_owned(),
                price: "$20".to_owned(),
                features: vec!["Unlimited".to_owned()],
                is_popular: true,
            },
        ];
        doc.faq = vec![FaqItem {
            question: "Is it free?".to_owned(),
            answer: "Yes, for hobby use.".to_owned(),
        }];
        doc.github_stats = Some(RepoStats {
            stars: 4321,
            forks: 12,
            issues: 3,
        });
        doc
    }

    #[test]
    fn test_document_shell() {
        let html = render_static_html(&base("modern-saas"), 2025);
        assert!(html.starts_with("<!DOCTYPE html>\n<html lang=\"en\" class=\"scroll-smooth\">"));
        assert!(html.contains("<title>Acme | Ship faster</title>"));
        assert!(html.contains("<meta name=\"description\" content=\"Deploy in seconds\">"));
        assert!(html.contains(":root { --lp-primary: #3b82f6; }"));
        assert!(html.contains("primary: '#3b82f6'"));
        assert!(html.contains(TAILWIND_CDN));
        assert!(html.contains(LUCIDE_CDN));
        assert!(html.contains("family=Playfair+Display"));
        assert!(html.contains("lucide.createIcons();"));
        assert!(html.contains("new IntersectionObserver"));
        assert!(html.ends_with("</html>\n"));
    }

    #[test]
    fn test_deterministic_output() {
        let doc = full("developer-tool");
        assert_eq!(render_static_html(&doc, 2025), render_static_html(&doc, 2025));
    }

    #[test]
    fn test_only_year_varies() {
        let doc = full("modern-saas");
        let a = render_static_html(&doc, 2025);
        let b = render_static_html(&doc, 2026);
        assert_ne!(a, b);
        assert_eq!(a.replace("2025", "2026"), b);
    }

    #[test]
    fn test_single_feature_page() {
        let mut doc = base("modern-saas");
        doc.features = vec![Feature {
            title: "Fast".to_owned(),
            description: "Really fast".to_owned(),
            icon: "Zap".to_owned(),
        }];
        let html = render_static_html(&doc, 2025);
        assert_eq!(html.matches("feature-card").count(), 1);
        assert!(html.contains(r#"class="reveal reveal-up h-full md:col-span-2""#));
        assert!(!html.contains(r#"id="pricing""#));
        assert!(!html.contains(r#"id="faq""#));
        assert!(!html.contains(r#"id="problem""#));
        assert!(html.contains(r#"data-lucide="zap""#));
    }

    #[test]
    fn test_full_page_sections_in_order() {
        let html = render_static_html(&full("modern-saas"), 2025);
        let positions: Vec<usize> = [
            "<nav",
            RELEASE_BADGE,
            TRUSTED_CAPTION,
            r#"id="problem""#,
            r#"id="features""#,
            "Best tool we adopted",
            r#"id="pricing""#,
            r#"id="faq""#,
            "Start building with Acme today.",
            "<footer",
        ]
        .iter()
        .map(|needle| html.find(needle).unwrap_or_else(|| panic!("missing {needle}")))
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{positions:?}");
    }

    #[test]
    fn test_dev_tool_is_dark() {
        let html = render_static_html(&full("developer-tool"), 2025);
        assert!(html.contains(r#"<html lang="en" class="dark scroll-smooth">"#));
        assert!(html.contains("bg-[#0B0F19] text-white antialiased"));
        assert!(html.contains("4,321 Stars"));
        assert!(html.contains("npm install @acme/core"));
        assert!(html.contains(INSTALL_BUTTON));
        assert!(!html.contains(RELEASE_BADGE));
    }

    #[test]
    fn test_popular_plan_emphasis() {
        let html = render_static_html(&full("modern-saas"), 2025);
        assert_eq!(html.matches(POPULAR_BADGE).count(), 1);
        assert_eq!(html.matches(POPULAR_PLAN).count(), 1);
        assert!(html.contains(r#"style="transition-delay: 150ms""#));
    }

    #[test]
    fn test_faq_css_disclosure() {
        let html = render_static_html(&full("modern-saas"), 2025);
        assert!(html.contains(".faq-item:hover .faq-answer, .faq-item:focus-within .faq-answer { display: block; }"));
        assert!(html.contains(r#"tabindex="0""#));
        assert!(html.contains(r#"<p class="faq-answer mt-2 text-slate-600">Yes, for hobby use.</p>"#));
    }

    #[test]
    fn test_text_is_escaped() {
        let mut doc = base("modern-saas");
        doc.hero.headline = "<script>alert(1)</script>".to_owned();
        doc.meta.brand_name = "A&B".to_owned();
        let html = render_static_html(&doc, 2025);
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(html.contains("&copy; 2025 A&amp;B. All rights reserved."));
    }

    #[test]
    fn test_malformed_theme_color_falls_back() {
        let mut doc = base("modern-saas");
        doc.meta.theme_color = "red; background: url(x)".to_owned();
        let html = render_static_html(&doc, 2025);
        assert!(html.contains("--lp-primary: #3b82f6;"));
        assert!(!html.contains("url(x)"));
    }

    #[test]
    fn test_serif_font_class() {
        let mut doc = base("modern-saas");
        doc.meta.font_pairing = "serif".to_owned();
        let html = render_static_html(&doc, 2025);
        assert!(html.contains("antialiased font-serif"));
        assert!(html.contains("body { font-family: 'Playfair Display', serif; }"));
    }

    #[test]
    fn test_short_testimonial_omitted() {
        let mut doc = full("modern-saas");
        doc.social_proof = Some(SocialProof {
            testimonial: Some("ok".to_owned()),
            ..SocialProof::default()
        });
        let html = render_static_html(&doc, 2025);
        assert!(!html.contains("<blockquote"));
    }
}
