//! The single portfolio page: every section in document order, then the
//! overlay viewer on top.

use leptos::prelude::*;

use crate::components::achievements::AchievementsSection;
use crate::components::certifications::CertificationsSection;
use crate::components::contact::ContactSection;
use crate::components::education::EducationSection;
use crate::components::experience::ExperienceSection;
use crate::components::navbar::Navbar;
use crate::components::overlay_viewer::OverlayViewer;
use crate::components::profile::{AboutSection, ProfileSection};
use crate::components::projects::ProjectsSection;
use crate::components::resume::ResumeSection;
use crate::components::skills::SkillsSection;

#[component]
pub fn PortfolioPage() -> impl IntoView {
    view! {
        <Navbar/>
        <ProfileSection/>
        <AboutSection/>
        <SkillsSection/>
        <EducationSection/>
        <ExperienceSection/>
        <ProjectsSection/>
        <CertificationsSection/>
        <AchievementsSection/>
        <ResumeSection/>
        <ContactSection/>
        <OverlayViewer/>
    }
}
