//! Render backend trait.

use crate::sections::{
    Cta, Faq, Features, Footer, Hero, Navbar, PageModel, Pricing, ProblemSolutionBlocks, Testimonial,
};

/// Output-specific emission for each section.
///
/// [`PageRenderer`](crate::PageRenderer) calls [`begin_page`](Self::begin_page)
/// once, then one method per present section in page order, then
/// [`finish`](Self::finish). Backends never see absent sections.
pub trait RenderBackend {
    /// Final rendered form.
    type Output;

    /// Called before the first section.
    fn begin_page(&mut self, page: &PageModel<'_>);

    fn navbar(&mut self, page: &PageModel<'_>, navbar: &Navbar<'_>);

    fn hero(&mut self, page: &PageModel<'_>, hero: &Hero<'_>);

    fn trusted_by(&mut self, page: &PageModel<'_>);

    fn problem_solution(&mut self, page: &PageModel<'_>, blocks: &ProblemSolutionBlocks<'_>);

    fn features(&mut self, page: &PageModel<'_>, features: &Features<'_>);

    fn social_proof(&mut self, page: &PageModel<'_>, testimonial: &Testimonial<'_>);

    fn pricing(&mut self, page: &PageModel<'_>, pricing: &Pricing<'_>);

    fn faq(&mut self, page: &PageModel<'_>, faq: &Faq<'_>);

    fn cta(&mut self, page: &PageModel<'_>, cta: &Cta<'_>);

    fn footer(&mut self, page: &PageModel<'_>, footer: &Footer<'_>);

    /// Consume the backend after the last section.
    fn finish(self, page: &PageModel<'_>) -> Self::Output;
}
