//! Generic page renderer with pluggable backend.

use chrono::Datelike;
use lp_content::ContentDocument;

use crate::backend::RenderBackend;
use crate::sections::{PageModel, Section, compose_page};

/// Inputs to a render besides the document itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    /// Year printed in the footer copyright line.
    pub copyright_year: i32,
}

impl Default for RenderOptions {
    /// Uses the current local year.
    fn default() -> Self {
        Self {
            copyright_year: chrono::Local::now().year(),
        }
    }
}

/// Walks a composed page and drives a [`RenderBackend`].
///
/// The renderer owns no presentation logic: it composes the
/// [`PageModel`] and dispatches each section to the backend in order.
pub struct PageRenderer<B: RenderBackend> {
    backend: B,
    options: RenderOptions,
}

impl<B: RenderBackend> PageRenderer<B> {
    /// Create a renderer using the current year for the copyright line.
    #[must_use]
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            options: RenderOptions::default(),
        }
    }

    /// Pin the copyright year, making output independent of the clock.
    #[must_use]
    pub fn with_copyright_year(mut self, year: i32) -> Self {
        self.options.copyright_year = year;
        self
    }

    #[must_use]
    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    /// Render a document. Never fails: missing content omits sections.
    pub fn render(self, doc: &ContentDocument) -> B::Output {
        let page = compose_page(doc, &self.options);
        Self::render_page(self.backend, &page)
    }

    /// Render an already composed page.
    pub fn render_page(mut backend: B, page: &PageModel<'_>) -> B::Output {
        backend.begin_page(page);
        for section in &page.sections {
            match section {
                Section::Navbar(navbar) => backend.navbar(page, navbar),
                Section::Hero(hero) => backend.hero(page, hero),
                Section::TrustedBy => backend.trusted_by(page),
                Section::ProblemSolution(blocks) => backend.problem_solution(page, blocks),
                Section::Features(features) => backend.features(page, features),
                Section::SocialProof(testimonial) => backend.social_proof(page, testimonial),
                Section::Pricing(pricing) => backend.pricing(page, pricing),
                Section::Faq(faq) => backend.faq(page, faq),
                Section::Cta(cta) => backend.cta(page, cta),
                Section::Footer(footer) => backend.footer(page, footer),
            }
        }
        backend.finish(page)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::sections::{
        Cta, Faq, Features, Footer, Hero, Navbar, Pricing, ProblemSolutionBlocks, Testimonial,
    };

    /// Records the call sequence.
    #[derive(Default)]
    struct Trace(Vec<&'static str>);

    impl RenderBackend for Trace {
        type Output = Vec<&'static str>;

        fn begin_page(&mut self, _: &PageModel<'_>) {
            self.0.push("begin");
        }
        fn navbar(&mut self, _: &PageModel<'_>, _: &Navbar<'_>) {
            self.0.push("navbar");
        }
        fn hero(&mut self, _: &PageModel<'_>, _: &Hero<'_>) {
            self.0.push("hero");
        }
        fn trusted_by(&mut self, _: &PageModel<'_>) {
            self.0.push("trusted-by");
        }
        fn problem_solution(&mut self, _: &PageModel<'_>, _: &ProblemSolutionBlocks<'_>) {
            self.0.push("problem-solution");
        }
        fn features(&mut self, _: &PageModel<'_>, _: &Features<'_>) {
            self.0.push("features");
        }
        fn social_proof(&mut self, _: &PageModel<'_>, _: &Testimonial<'_>) {
            self.0.push("social-proof");
        }
        fn pricing(&mut self, _: &PageModel<'_>, _: &Pricing<'_>) {
            self.0.push("pricing");
        }
        fn faq(&mut self, _: &PageModel<'_>, _: &Faq<'_>) {
            self.0.push("faq");
        }
        fn cta(&mut self, _: &PageModel<'_>, _: &Cta<'_>) {
            self.0.push("cta");
        }
        fn footer(&mut self, _: &PageModel<'_>, footer: &Footer<'_>) {
            assert!(footer.copyright.starts_with("© 1999"));
            self.0.push("footer");
        }
        fn finish(mut self, _: &PageModel<'_>) -> Self::Output {
            self.0.push("finish");
            self.0
        }
    }

    #[test]
    fn test_dispatch_order() {
        let doc = ContentDocument::default();
        let calls = PageRenderer::new(Trace::default())
            .with_copyright_year(1999)
            .render(&doc);
        assert_eq!(
            calls,
            vec!["begin", "navbar", "hero", "trusted-by", "features", "cta", "footer", "finish"]
        );
    }

    #[test]
    fn test_default_year_is_current() {
        assert!(RenderOptions::default().copyright_year >= 2024);
    }
}
