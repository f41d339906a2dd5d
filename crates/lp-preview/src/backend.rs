//! Tree backend for the interactive preview.

use lp_content::ContentDocument;
use lp_renderer::sections::{
    CTA_NOTE, Cta, DEMO_BUTTON, DOCS_BUTTON, FAQ_HEADING, FEATURES_HEADING, FEATURES_SUBHEADING,
    FOOTER_COLUMNS, FOOTER_SOCIAL, FOOTER_TAGLINE, Faq, Features, Footer, Hero, HeroPanel,
    INSTALL_BUTTON, NAV_LINKS, Navbar, PLAN_BLURB, PLAN_BUTTON, POPULAR_BADGE, PRICE_PERIOD,
    PRICING_HEADING, PRICING_SUBHEADING, PROBLEM_BADGE, PROBLEM_OVERLAY, PROBLEM_POINTS, PageModel,
    Pricing, ProblemSolutionBlocks, RELEASE_BADGE, SIGN_IN, SOLUTION_BADGE, SOLUTION_LINK,
    SOLUTION_OVERLAY, SectionKind, TERMINAL_DONE, TERMINAL_PROGRESS, TERMINAL_TITLE,
    TRUSTED_CAPTION, TRUSTED_MARKS, Testimonial,
};
use lp_renderer::styles::{POPULAR_PLAN, POPULAR_PLAN_BUTTON, WIDE_CARD};
use lp_renderer::{AiImage, Icon, PageRenderer, RenderBackend, Reveal};
use serde::Serialize;

use crate::node::{Node, RevealId};
use crate::viewport::{ChromeBar, Viewport};

/// Render a document into a preview tree.
#[must_use]
pub fn render_preview(doc: &ContentDocument, viewport: Viewport, copyright_year: i32) -> PreviewTree {
    PageRenderer::new(TreeBackend::new(viewport))
        .with_copyright_year(copyright_year)
        .render(doc)
}

/// The whole preview: one scroll container holding every present section.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewTree {
    pub viewport: Viewport,
    pub is_dark: bool,
    pub accent_color: String,
    pub frame_class: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chrome: Option<ChromeBar>,
    pub sections: Vec<SectionNode>,
}

impl PreviewTree {
    /// Every reveal id in document order.
    #[must_use]
    pub fn reveal_ids(&self) -> Vec<RevealId> {
        let mut ids = Vec::new();
        for section in &self.sections {
            section.node.walk(&mut |node| {
                if let Node::Reveal { id, .. } = node {
                    ids.push(*id);
                }
            });
        }
        ids
    }

    #[must_use]
    pub fn section(&self, kind: SectionKind) -> Option<&SectionNode> {
        self.sections.iter().find(|s| s.kind == kind)
    }

    #[must_use]
    pub fn kinds(&self) -> Vec<SectionKind> {
        self.sections.iter().map(|s| s.kind).collect()
    }
}

/// One top-level section of the tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SectionNode {
    pub kind: SectionKind,
    pub node: Node,
}

/// Backend that builds a [`PreviewTree`].
#[derive(Debug)]
pub struct TreeBackend {
    viewport: Viewport,
    next_reveal: u32,
    sections: Vec<SectionNode>,
}

impl TreeBackend {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            next_reveal: 0,
            sections: Vec::new(),
        }
    }

    fn reveal(&mut self, reveal: Reveal, class: &str, children: Vec<Node>) -> Node {
        let id = RevealId(self.next_reveal);
        self.next_reveal += 1;
        Node::Reveal {
            id,
            reveal,
            class: class.to_owned(),
            children,
        }
    }

    fn push(&mut self, kind: SectionKind, node: Node) {
        let node = match kind.anchor() {
            Some(anchor) => node.attr("id", anchor),
            None => node,
        };
        self.sections.push(SectionNode { kind, node });
    }

    fn saas_hero(&mut self, page: &PageModel<'_>, hero: &Hero<'_>, cta_primary: &str, dashboard: &AiImage) -> Node {
        let [badge, headline, sub, buttons, panel] = hero.reveals();
        let badge = self.reveal(
            badge,
            "",
            vec![Node::text_el(
                "div",
                "inline-flex items-center gap-2 px-3 py-1 rounded-full bg-slate-50 border border-slate-200 text-slate-600 text-xs font-bold uppercase tracking-wide mb-8",
                RELEASE_BADGE,
            )],
        );
        let headline = self.reveal(
            headline,
            "",
            vec![Node::text_el(
                "h1",
                "text-6xl md:text-8xl font-bold tracking-tighter text-slate-900 mb-8 leading-[1.05]",
                hero.headline,
            )],
        );
        let sub = self.reveal(
            sub,
            "",
            vec![Node::text_el(
                "p",
                "text-xl md:text-2xl text-slate-500 max-w-3xl mx-auto mb-12 leading-relaxed font-light",
                hero.subheadline,
            )],
        );
        let buttons = self.reveal(
            buttons,
            "",
            vec![
                Node::el("div", "flex flex-col sm:flex-row gap-4 justify-center items-center mb-20")
                    .child(
                        Node::text_el(
                            "button",
                            "px-8 py-4 rounded-full text-lg font-bold text-white shadow-2xl shadow-blue-500/20",
                            cta_primary,
                        )
                        .style(format!("background-color: {}", page.theme.accent_color)),
                    )
                    .child(
                        Node::el(
                            "button",
                            "px-8 py-4 rounded-full text-lg font-bold text-slate-700 bg-white border border-slate-200 flex items-center gap-2 shadow-sm",
                        )
                        .child(Node::icon(Icon::PlayCircle, "w-5 h-5"))
                        .child(Node::text(DEMO_BUTTON)),
                    ),
            ],
        );
        let panel = self.reveal(
            panel,
            "",
            vec![
                Node::el("div", "relative mx-auto rounded-2xl p-2 bg-slate-900/5 shadow-2xl ring-1 ring-slate-900/10")
                    .child(
                        Node::el("div", "rounded-xl overflow-hidden bg-white shadow-inner aspect-[16/9] relative group")
                            .child(Node::image(dashboard, "w-full h-full object-cover"))
                            .child(
                                Node::el("div", "absolute -bottom-10 -right-10 w-48 h-32 bg-white rounded-lg shadow-xl p-4 hidden md:block")
                                    .child(Node::icon(Icon::TrendingUp, "w-4 h-4 text-green-600")),
                            ),
                    ),
            ],
        );
        Node::el("section", "relative pt-32 pb-20 overflow-hidden bg-white").child(
            Node::el("div", "relative z-10 max-w-6xl mx-auto px-6 text-center")
                .children([badge, headline, sub, buttons, panel]),
        )
    }

    fn dev_tool_hero(&mut self, hero: &Hero<'_>, stars: &str, install_command: &str) -> Node {
        let [badge, headline, sub, buttons, panel] = hero.reveals();
        let badge = self.reveal(
            badge,
            "",
            vec![
                Node::el("div", "inline-flex items-center gap-3 px-3 py-1.5 rounded-full border border-slate-700 bg-slate-800/50 text-blue-400 font-mono text-sm mb-8")
                    .child(Node::icon(Icon::Github, "w-4 h-4"))
                    .child(Node::text_el("span", "", format!("{stars} Stars"))),
            ],
        );
        let headline = self.reveal(
            headline,
            "",
            vec![Node::text_el(
                "h1",
                "text-6xl md:text-8xl font-bold tracking-tighter mb-8 leading-none bg-clip-text text-transparent bg-gradient-to-br from-white via-white to-slate-500",
                hero.headline,
            )],
        );
        let sub = self.reveal(
            sub,
            "",
            vec![Node::text_el(
                "p",
                "text-xl text-slate-400 mb-10 leading-relaxed max-w-lg font-light",
                hero.subheadline,
            )],
        );
        let buttons = self.reveal(
            buttons,
            "",
            vec![
                Node::el("div", "flex flex-col sm:flex-row gap-4")
                    .child(
                        Node::el("button", "h-14 px-8 rounded-full bg-white text-slate-900 font-bold flex items-center justify-center gap-2")
                            .child(Node::icon(Icon::Terminal, "w-5 h-5"))
                            .child(Node::text(INSTALL_BUTTON)),
                    )
                    .child(Node::text_el(
                        "button",
                        "h-14 px-8 rounded-full border border-slate-700 text-slate-300 font-medium bg-slate-900/50",
                        DOCS_BUTTON,
                    )),
            ],
        );
        let line = |prompt: &str, prompt_class: &str, line_class: &str, text: &str| {
            Node::el("div", format!("flex {line_class}"))
                .child(Node::text_el("span", format!("mr-4 {prompt_class}"), prompt))
                .child(Node::text_el("span", "", text))
        };
        let terminal = Node::el("div", "relative bg-[#0F1117] rounded-xl border border-slate-800 shadow-2xl overflow-hidden")
            .child(
                Node::el("div", "flex items-center justify-between px-4 py-3 border-b border-slate-800")
                    .child(Node::text_el("div", "text-xs text-slate-500 font-mono", TERMINAL_TITLE)),
            )
            .child(
                Node::el("div", "p-6 font-mono text-sm overflow-x-auto text-slate-300")
                    .child(line("$", "text-blue-400", "", install_command))
                    .child(line(" ", "", "text-slate-500 mt-2", TERMINAL_PROGRESS))
                    .child(line("✔", "", "text-green-400 mt-2", TERMINAL_DONE))
                    .child(line("$", "text-blue-400", "mt-4", "_")),
            );
        let panel = self.reveal(panel, "relative", vec![terminal]);
        Node::el("section", "relative pt-32 pb-24 px-6 bg-[#0B0F19] text-white overflow-hidden min-h-[90vh] flex flex-col justify-center")
            .child(
                Node::el("div", "relative z-10 max-w-7xl mx-auto grid lg:grid-cols-2 gap-20 items-center")
                    .child(Node::el("div", "").children([badge, headline, sub, buttons]))
                    .child(panel),
            )
    }
}

impl RenderBackend for TreeBackend {
    type Output = PreviewTree;

    fn begin_page(&mut self, page: &PageModel<'_>) {
        tracing::debug!(
            viewport = self.viewport.as_str(),
            sections = page.sections.len(),
            "Building preview tree"
        );
    }

    fn navbar(&mut self, page: &PageModel<'_>, navbar: &Navbar<'_>) {
        let styles = page.theme.styles();
        let accent = format!("background-color: {}", page.theme.accent_color);
        let links = NAV_LINKS.iter().map(|link| {
            Node::text_el("a", "hover:text-blue-500 transition-colors", link.label).attr("href", link.href)
        });
        let node = Node::el(
            "nav",
            format!("flex items-center justify-between px-6 py-5 sticky top-0 z-40 backdrop-blur-xl border-b {}", styles.nav),
        )
        .child(
            Node::el("div", "font-bold text-xl flex items-center gap-2 tracking-tighter")
                .child(
                    Node::el("div", "p-1.5 rounded-lg text-white shadow-lg")
                        .style(accent.clone())
                        .child(Node::icon(Icon::Box, "w-5 h-5")),
                )
                .child(Node::text_el("span", styles.nav_brand, navbar.brand)),
        )
        .child(Node::el("div", format!("hidden md:flex gap-8 text-sm font-medium {}", styles.nav_links)).children(links))
        .child(
            Node::el("div", "flex gap-4 items-center")
                .child(Node::text_el("button", format!("hidden sm:block text-sm font-medium {}", styles.nav_links), SIGN_IN))
                .child(
                    Node::text_el("button", "px-5 py-2.5 rounded-full text-sm font-semibold text-white shadow-xl", navbar.button)
                        .style(accent),
                ),
        );
        self.push(SectionKind::Navbar, node);
    }

    fn hero(&mut self, page: &PageModel<'_>, hero: &Hero<'_>) {
        let node = match &hero.panel {
            HeroPanel::Saas { cta_primary, dashboard } => self.saas_hero(page, hero, cta_primary, dashboard),
            HeroPanel::DevTool {
                stars,
                install_command,
            } => self.dev_tool_hero(hero, stars, install_command),
        };
        self.push(SectionKind::Hero, node);
    }

    fn trusted_by(&mut self, page: &PageModel<'_>) {
        let styles = page.theme.styles();
        let icon_class = format!("w-8 h-8 {}", styles.trusted_icon);
        let node = Node::el("div", format!("py-12 border-b {}", styles.trusted))
            .child(Node::text_el(
                "p",
                format!("text-center text-xs font-bold uppercase tracking-widest mb-8 opacity-40 {}", styles.trusted_caption),
                TRUSTED_CAPTION,
            ))
            .child(
                Node::el("div", "flex justify-center flex-wrap gap-12 opacity-30 grayscale hover:grayscale-0 transition-all duration-500 px-6")
                    .children(TRUSTED_MARKS.iter().map(|mark| Node::icon(*mark, icon_class.clone()))),
            );
        self.push(SectionKind::TrustedBy, node);
    }

    fn problem_solution(&mut self, page: &PageModel<'_>, blocks: &ProblemSolutionBlocks<'_>) {
        let styles = page.theme.styles();
        let mut inner = Node::el("div", "max-w-7xl mx-auto space-y-32");

        if let Some(problem) = &blocks.problem {
            let visual = self.reveal(
                Reveal::left(0),
                "",
                vec![
                    Node::el("div", "relative aspect-square md:aspect-[4/3] rounded-3xl overflow-hidden shadow-2xl")
                        .child(Node::image(&problem.image, "w-full h-full object-cover opacity-90"))
                        .child(
                            Node::el("div", "absolute bottom-8 left-8 bg-white/90 backdrop-blur p-4 rounded-xl shadow-lg max-w-xs")
                                .child(
                                    Node::el("div", "flex items-center gap-3 text-red-600 font-bold mb-1")
                                        .child(Node::icon(Icon::AlertCircle, "w-5 h-5"))
                                        .child(Node::text_el("span", "", PROBLEM_BADGE)),
                                )
                                .child(Node::text_el("p", "text-slate-600 text-sm", PROBLEM_OVERLAY)),
                        ),
                ],
            );
            let points = PROBLEM_POINTS.iter().map(|point| {
                Node::el("div", "flex items-center gap-3")
                    .child(Node::icon(Icon::X, "w-5 h-5 text-red-500"))
                    .child(Node::text_el("span", styles.list_item, *point))
            });
            let copy = self.reveal(
                Reveal::up(0),
                "",
                vec![
                    Node::el("div", "space-y-6")
                        .child(Node::text_el("h2", "text-4xl md:text-5xl font-bold leading-tight tracking-tight", problem.title))
                        .child(Node::text_el("p", format!("text-xl leading-relaxed font-light {}", styles.muted), problem.description))
                        .child(Node::el("div", "pl-6 border-l-4 border-red-500/30 space-y-4").children(points)),
                ],
            );
            inner = inner.child(Node::el("div", "grid lg:grid-cols-2 gap-16 items-center").children([visual, copy]));
        }

        if let Some(solution) = &blocks.solution {
            let visual = self.reveal(
                Reveal::right(0),
                "lg:order-2",
                vec![
                    Node::el("div", "relative aspect-square md:aspect-[4/3] rounded-3xl overflow-hidden shadow-2xl ring-1 ring-slate-900/5")
                        .child(Node::image(&solution.image, "w-full h-full object-cover"))
                        .child(
                            Node::el("div", "absolute top-8 right-8 bg-white/90 backdrop-blur p-4 rounded-xl shadow-lg max-w-xs")
                                .child(
                                    Node::el("div", "flex items-center gap-3 text-green-600 font-bold mb-1")
                                        .child(Node::icon(Icon::CheckCircle2, "w-5 h-5"))
                                        .child(Node::text_el("span", "", SOLUTION_BADGE)),
                                )
                                .child(Node::text_el("p", "text-slate-600 text-sm", SOLUTION_OVERLAY)),
                        ),
                ],
            );
            let copy = self.reveal(
                Reveal::up(0),
                "lg:order-1",
                vec![
                    Node::el("div", "space-y-6")
                        .child(
                            Node::el(
                                "div",
                                format!("inline-flex items-center gap-2 px-3 py-1 rounded-full text-xs font-bold uppercase tracking-wide mb-2 {}", styles.solution_badge),
                            )
                            .child(Node::icon(Icon::Sparkles, "w-3 h-3"))
                            .child(Node::text(SOLUTION_BADGE)),
                        )
                        .child(Node::text_el("h2", "text-4xl md:text-5xl font-bold leading-tight tracking-tight", solution.title))
                        .child(Node::text_el("p", format!("text-xl leading-relaxed font-light {}", styles.muted), solution.description))
                        .child(
                            Node::el("a", format!("mt-4 flex items-center gap-2 font-semibold group {}", styles.link))
                                .attr("href", "#features")
                                .child(Node::text_el("span", "group-hover:underline", SOLUTION_LINK))
                                .child(Node::icon(Icon::ArrowRight, "w-4 h-4 transition-transform group-hover:translate-x-1")),
                        ),
                ],
            );
            inner = inner.child(Node::el("div", "grid lg:grid-cols-2 gap-16 items-center").children([visual, copy]));
        }

        let node = Node::el("div", format!("py-32 px-6 overflow-hidden {}", styles.zigzag)).child(inner);
        self.push(SectionKind::ProblemSolution, node);
    }

    fn features(&mut self, page: &PageModel<'_>, features: &Features<'_>) {
        let styles = page.theme.styles();
        let header = self.reveal(
            Reveal::up(0),
            "",
            vec![
                Node::el("div", "text-center max-w-3xl mx-auto mb-20")
                    .child(Node::text_el("h2", format!("text-4xl md:text-5xl font-bold mb-6 tracking-tight {}", styles.heading), FEATURES_HEADING))
                    .child(Node::text_el("p", format!("text-xl {}", styles.features_sub), FEATURES_SUBHEADING)),
            ],
        );
        let cards: Vec<Node> = features
            .cards
            .iter()
            .map(|card| {
                let class = if card.wide { format!("{WIDE_CARD} h-full") } else { "h-full".to_owned() };
                let body = Node::el(
                    "div",
                    format!("group relative h-full rounded-3xl p-8 overflow-hidden transition-all duration-300 hover:shadow-2xl border {}", styles.feature_card),
                )
                .child(
                    Node::el("div", "relative z-10 flex flex-col h-full")
                        .child(
                            Node::el("div", format!("w-12 h-12 rounded-2xl flex items-center justify-center mb-6 text-2xl transition-transform group-hover:scale-110 {}", styles.feature_icon))
                                .child(Node::icon(card.icon, "")),
                        )
                        .child(Node::text_el("h3", format!("text-2xl font-bold mb-3 {}", styles.heading), card.title))
                        .child(Node::text_el("p", format!("leading-relaxed {}", styles.muted), card.description)),
                );
                self.reveal(card.reveal, &class, vec![body])
            })
            .collect();
        let node = Node::el("section", format!("py-32 px-6 {}", styles.features_bg)).child(
            Node::el("div", "max-w-7xl mx-auto")
                .child(header)
                .child(Node::el("div", "grid md:grid-cols-3 gap-6 auto-rows-[300px]").children(cards)),
        );
        self.push(SectionKind::Features, node);
    }

    fn social_proof(&mut self, page: &PageModel<'_>, testimonial: &Testimonial<'_>) {
        let mut person = Node::el("div", "flex flex-col items-center")
            .child(
                Node::el("div", "w-16 h-16 rounded-full bg-gradient-to-tr from-blue-400 to-purple-500 p-[2px] mb-4").child(
                    Node::text_el(
                        "div",
                        "w-full h-full rounded-full bg-slate-900 flex items-center justify-center text-xl font-bold text-white uppercase",
                        testimonial.initial.to_string(),
                    ),
                ),
            )
            .child(Node::text_el("div", "text-white font-bold text-lg", testimonial.author));
        if let Some(stat_line) = &testimonial.stat_line {
            person = person.child(Node::text_el("div", "text-slate-400 mt-2", stat_line.clone()));
        }
        let body = self.reveal(
            Reveal::up(0),
            "",
            vec![
                Node::el("div", "flex justify-center mb-8 text-yellow-400 gap-1")
                    .children((0..5).map(|_| Node::icon(Icon::Star, "w-6 h-6 fill-current"))),
                Node::text_el(
                    "blockquote",
                    "text-3xl md:text-5xl font-medium leading-tight text-white mb-10",
                    format!("\"{}\"", testimonial.quote),
                ),
                person,
            ],
        );
        let node = Node::el(
            "section",
            format!("py-32 px-6 border-y relative overflow-hidden {}", page.theme.styles().social),
        )
        .child(Node::el("div", "relative z-10 max-w-5xl mx-auto text-center").child(body));
        self.push(SectionKind::SocialProof, node);
    }

    fn pricing(&mut self, page: &PageModel<'_>, pricing: &Pricing<'_>) {
        let styles = page.theme.styles();
        let header = self.reveal(
            Reveal::up(0),
            "",
            vec![
                Node::el("div", "text-center mb-20")
                    .child(Node::text_el("h2", format!("text-4xl font-bold mb-4 tracking-tight {}", styles.heading), PRICING_HEADING))
                    .child(Node::text_el("p", styles.muted, PRICING_SUBHEADING)),
            ],
        );
        let cards: Vec<Node> = pricing
            .plans
            .iter()
            .map(|plan| {
                let (card, button, check) = if plan.popular {
                    (POPULAR_PLAN, POPULAR_PLAN_BUTTON, "text-blue-400")
                } else {
                    (styles.plan_card, styles.plan_button, "text-green-500")
                };
                let mut body = Node::el(
                    "div",
                    format!("relative p-10 rounded-3xl h-full flex flex-col transition-transform duration-300 hover:-translate-y-2 {card}"),
                );
                if plan.popular {
                    body = body.child(Node::text_el(
                        "div",
                        "absolute -top-4 left-1/2 -translate-x-1/2 px-4 py-1 bg-blue-600 text-white text-xs font-bold rounded-full uppercase tracking-wide",
                        POPULAR_BADGE,
                    ));
                }
                let check_class = format!("w-5 h-5 shrink-0 {check}");
                let items = plan.features.iter().map(|feature| {
                    Node::el("li", "flex items-start gap-3 text-sm")
                        .child(Node::icon(Icon::Check, check_class.clone()))
                        .child(Node::text_el("span", "opacity-80", feature.as_str()))
                });
                let body = body
                    .child(Node::text_el("h3", "text-xl font-bold mb-2 opacity-80", plan.name))
                    .child(
                        Node::el("div", "text-5xl font-bold mb-6 tracking-tight")
                            .child(Node::text(plan.price))
                            .child(Node::text_el("span", "text-lg font-normal opacity-50", PRICE_PERIOD)),
                    )
                    .child(Node::text_el("p", "text-sm opacity-60 mb-8 pb-8 border-b border-gray-200/10", PLAN_BLURB))
                    .child(Node::el("ul", "space-y-4 mb-8 flex-1").children(items))
                    .child(Node::text_el("button", format!("w-full py-4 rounded-xl font-bold transition-all {button}"), PLAN_BUTTON));
                self.reveal(plan.reveal, "h-full", vec![body])
            })
            .collect();
        let node = Node::el("section", format!("py-32 px-6 {}", styles.pricing_bg)).child(
            Node::el("div", "max-w-7xl mx-auto")
                .child(header)
                .child(Node::el("div", "grid md:grid-cols-3 gap-8 items-start").children(cards)),
        );
        self.push(SectionKind::Pricing, node);
    }

    fn faq(&mut self, page: &PageModel<'_>, faq: &Faq<'_>) {
        let styles = page.theme.styles();
        let heading = self.reveal(
            Reveal::up(0),
            "",
            vec![Node::text_el(
                "h2",
                format!("text-3xl font-bold mb-16 text-center tracking-tight {}", styles.heading),
                FAQ_HEADING,
            )],
        );
        let items: Vec<Node> = faq
            .items
            .iter()
            .map(|item| {
                let disclosure = Node::Disclosure {
                    class: format!("p-6 rounded-2xl transition-all hover:shadow-md cursor-pointer group {}", styles.faq_item),
                    summary: vec![
                        Node::el("div", "flex justify-between items-center mb-2")
                            .child(Node::text_el("h4", format!("font-bold text-lg {}", styles.heading), item.question))
                            .child(Node::icon(Icon::Plus, format!("w-5 h-5 transition-transform group-hover:rotate-45 {}", styles.faq_icon))),
                    ],
                    detail: vec![Node::text_el("p", format!("mt-2 {}", styles.muted), item.answer)],
                };
                self.reveal(item.reveal, "", vec![disclosure])
            })
            .collect();
        let node = Node::el("section", format!("py-32 px-6 {}", styles.faq_bg)).child(
            Node::el("div", "max-w-3xl mx-auto")
                .child(heading)
                .child(Node::el("div", "space-y-4").children(items)),
        );
        self.push(SectionKind::Faq, node);
    }

    fn cta(&mut self, page: &PageModel<'_>, cta: &Cta<'_>) {
        let body = self.reveal(
            Reveal::up(0),
            "relative z-10",
            vec![
                Node::text_el("h2", "text-4xl md:text-6xl font-bold mb-8 text-white tracking-tight", cta.headline.clone()),
                Node::el("div", "flex flex-col sm:flex-row gap-4 justify-center").child(Node::text_el(
                    "button",
                    "px-10 py-5 rounded-full text-xl font-bold text-slate-900 bg-white hover:bg-blue-50 transition-all shadow-xl",
                    cta.button,
                )),
                Node::text_el("p", "mt-8 text-slate-400 text-sm", CTA_NOTE),
            ],
        );
        let node = Node::el("section", "py-24 px-6").child(
            Node::el(
                "div",
                format!("max-w-5xl mx-auto rounded-[3rem] p-12 md:p-24 text-center relative overflow-hidden {}", page.theme.styles().cta_panel),
            )
            .child(body),
        );
        self.push(SectionKind::Cta, node);
    }

    fn footer(&mut self, page: &PageModel<'_>, footer: &Footer<'_>) {
        let styles = page.theme.styles();
        let brand = Node::el("div", "")
            .child(
                Node::el("div", format!("font-bold text-xl mb-4 flex items-center gap-2 {}", styles.heading))
                    .child(Node::icon(Icon::Box, "w-6 h-6 text-blue-500"))
                    .child(Node::text(footer.brand)),
            )
            .child(Node::text_el("p", "mb-4", FOOTER_TAGLINE))
            .child(
                Node::el("div", "flex gap-4")
                    .children(FOOTER_SOCIAL.iter().map(|icon| Node::icon(*icon, "w-5 h-5 cursor-pointer hover:text-blue-500 transition-colors"))),
            );
        let columns = FOOTER_COLUMNS.iter().map(|(heading, links)| {
            Node::el("div", "")
                .child(Node::text_el("h4", format!("font-bold mb-4 {}", styles.heading), *heading))
                .child(Node::el("ul", "space-y-2").children(links.iter().map(|link| Node::text_el("li", "", *link))))
        });
        let node = Node::el("footer", format!("py-20 px-6 border-t {}", styles.footer))
            .child(
                Node::el("div", "max-w-7xl mx-auto grid md:grid-cols-4 gap-12 mb-12 text-sm")
                    .child(brand)
                    .children(columns),
            )
            .child(
                Node::el("div", "max-w-7xl mx-auto pt-8 border-t border-gray-200/10 text-center")
                    .child(Node::text_el("p", "", footer.copyright.clone())),
            );
        self.push(SectionKind::Footer, node);
    }

    fn finish(self, page: &PageModel<'_>) -> PreviewTree {
        PreviewTree {
            viewport: self.viewport,
            is_dark: page.theme.is_dark,
            accent_color: page.theme.accent_color.clone(),
            frame_class: self.viewport.frame_class(&page.theme),
            chrome: self.viewport.chrome_bar(page.title, &page.theme),
            sections: self.sections,
        }
    }
}

#[cfg(test)]
mod tests {
    use lp_content::{FaqItem, Feature, Meta, PricingPlan, ProblemSolution, RepoStats, SocialProof};
    use pretty_assertions::assert_eq;

    use super::*;

    fn doc(layout: &str) -> ContentDocument {
        ContentDocument {
            meta: Meta {
                brand_name: "Acme".to_owned(),
                title: "Acme Cloud".to_owned(),
                theme_color: "#10b981".to_owned(),
                layout_style: layout.to_owned(),
                ..Meta::default()
            },
            ..ContentDocument::default()
        }
    }

    fn find_text(tree: &PreviewTree, kind: SectionKind) -> String {
        tree.section(kind).map(|s| s.node.text_content()).unwrap_or_default()
    }

    fn feature() -> Feature {
        Feature {
            title: "Fast".to_owned(),
            description: "Very".to_owned(),
            icon: "Zap".to_owned(),
        }
    }

    #[test]
    fn test_minimal_tree() {
        let tree = render_preview(&doc("modern-saas"), Viewport::Desktop, 2025);
        assert_eq!(
            tree.kinds(),
            vec![
                SectionKind::Navbar,
                SectionKind::Hero,
                SectionKind::TrustedBy,
                SectionKind::Features,
                SectionKind::Cta,
                SectionKind::Footer,
            ]
        );
        assert!(!tree.is_dark);
        assert_eq!(tree.accent_color, "#10b981");
        assert_eq!(tree.chrome.as_ref().map(|c| c.title.as_str()), Some("Acme Cloud"));
    }

    #[test]
    fn test_matches_static_section_presence() {
        let mut d = doc("modern-saas");
        d.problem_solution = Some(ProblemSolution {
            solution_title: Some("Automate".to_owned()),
            ..ProblemSolution::default()
        });
        d.social_proof = Some(SocialProof {
            testimonial: Some("abcd".to_owned()),
            ..SocialProof::default()
        });
        d.pricing = vec![PricingPlan::default()];
        let tree = render_preview(&d, Viewport::Mobile, 2025);
        let kinds = tree.kinds();
        assert!(kinds.contains(&SectionKind::ProblemSolution));
        assert!(!kinds.contains(&SectionKind::SocialProof));
        assert!(kinds.contains(&SectionKind::Pricing));
        assert!(!kinds.contains(&SectionKind::Faq));
        assert_eq!(tree.chrome, None);

        let text = find_text(&tree, SectionKind::ProblemSolution);
        assert!(text.contains("Automate"));
        assert!(!text.contains(PROBLEM_OVERLAY));
    }

    #[test]
    fn test_reveal_ids_are_unique_and_sequential() {
        let mut d = doc("developer-tool");
        d.features = vec![feature(), feature(), feature(), feature()];
        d.faq = vec![FaqItem::default(); 2];
        let tree = render_preview(&d, Viewport::Desktop, 2025);
        let ids = tree.reveal_ids();
        let expected: Vec<RevealId> = (0..u32::try_from(ids.len()).unwrap()).map(RevealId).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_wide_cards() {
        let mut d = doc("modern-saas");
        d.features = vec![feature(), feature(), feature(), feature(), feature()];
        let tree = render_preview(&d, Viewport::Desktop, 2025);
        let mut wide = Vec::new();
        tree.section(SectionKind::Features).unwrap().node.walk(&mut |node| {
            if let Node::Reveal { class, .. } = node
                && (class.starts_with("h-full") || class.starts_with(WIDE_CARD))
            {
                wide.push(class.contains(WIDE_CARD));
            }
        });
        assert_eq!(wide, vec![true, false, false, true, false]);
    }

    #[test]
    fn test_dev_tool_hero() {
        let d = doc("developer-tool").with_stats(RepoStats {
            stars: 2048,
            forks: 0,
            issues: 0,
        });
        let tree = render_preview(&d, Viewport::Desktop, 2025);
        assert!(tree.is_dark);
        let hero = find_text(&tree, SectionKind::Hero);
        assert!(hero.contains("2,048 Stars"));
        assert!(hero.contains("npm install @acme/core"));
        assert!(!hero.contains(RELEASE_BADGE));
    }

    #[test]
    fn test_faq_uses_disclosure() {
        let mut d = doc("modern-saas");
        d.faq = vec![FaqItem {
            question: "Why?".to_owned(),
            answer: "Because.".to_owned(),
        }];
        let tree = render_preview(&d, Viewport::Desktop, 2025);
        let mut found = None;
        tree.section(SectionKind::Faq).unwrap().node.walk(&mut |node| {
            if let Node::Disclosure { summary, detail, .. } = node {
                found = Some((
                    summary.iter().map(Node::text_content).collect::<String>(),
                    detail.iter().map(Node::text_content).collect::<String>(),
                ));
            }
        });
        assert_eq!(found, Some(("Why?".to_owned(), "Because.".to_owned())));
    }

    #[test]
    fn test_section_anchors() {
        let mut d = doc("modern-saas");
        d.pricing = vec![PricingPlan::default()];
        let tree = render_preview(&d, Viewport::Desktop, 2025);
        let Node::Element { attrs, .. } = &tree.section(SectionKind::Pricing).unwrap().node else {
            panic!("pricing should be an element");
        };
        assert_eq!(attrs, &vec![("id", "pricing".to_owned())]);
    }

    #[test]
    fn test_footer_copyright() {
        let tree = render_preview(&doc("modern-saas"), Viewport::Desktop, 2031);
        assert!(find_text(&tree, SectionKind::Footer).contains("© 2031 Acme. All rights reserved."));
    }
}
