//! Compiled-in portfolio content.
//!
//! Long prompt/response texts live under `content/` and are embedded with
//! `include_str!`; everything else is literal data.

use crate::model::profile::Profile;
use crate::model::project::{Alignment, GalleryItem, Project, ProjectDetail};
use crate::repo::content_repo::ContentBundle;

const T2I_PROMPT_34: &str = include_str!("../../content/t2i_prompt_34.md");
const T2I_PROMPT_37: &str = include_str!("../../content/t2i_prompt_37.md");
const SPECS_PROMPT_1: &str = include_str!("../../content/specs_prompt_1.md");
const SPECS_RESPONSE_1: &str = include_str!("../../content/specs_response_1.md");
const SPECS_PROMPT_2: &str = include_str!("../../content/specs_prompt_2.md");
const SPECS_RESPONSE_2: &str = include_str!("../../content/specs_response_2.md");
const SPECS_PROMPT_3: &str = include_str!("../../content/specs_prompt_3.md");
const SPECS_RESPONSE_3: &str = include_str!("../../content/specs_response_3.md");
const SPECS_FINAL_PLAN: &str = include_str!("../../content/specs_final_plan.md");

/// Embedded files end with a newline the display text should not carry.
fn embedded(text: &'static str) -> String {
    text.trim_end().to_string()
}

fn labels(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_string()).collect()
}

/// Returns the built-in profile and project list.
pub fn builtin_bundle() -> ContentBundle {
    ContentBundle {
        profile: builtin_profile(),
        projects: vec![t2i_dashboard(), viral_automation(), specs_ai()],
    }
}

fn builtin_profile() -> Profile {
    Profile {
        name: "Jacob Mohan".to_string(),
        title: "Agentic Developer".to_string(),
        tagline: "Building intelligent systems with hands-on LLM experience.".to_string(),
        location: "Bunnell, Fl".to_string(),
        email: "jacobdmohan@gmail.com".to_string(),
        phone: "386-624-8197".to_string(),
        link: "https://github.com/Codingtheblocks".to_string(),
        bio: "I’m an agentic software developer who builds specification-driven AI systems \
              using modern LLM tooling. My work focuses on turning clear requirements into \
              robust, testable applications—spanning algorithmic trading engines, internal \
              dashboards, and AI-integrated workflows."
            .to_string(),
        skills: labels(&[
            "JavaScript (ES6+)",
            "Python",
            "React",
            "Vite",
            "Electron",
            "Node.js",
            "SQL",
            "ffmpeg",
            "WhisperX",
            "Gemini API",
            "RAG",
            "LLM Workflows",
        ]),
    }
}

fn t2i_dashboard() -> Project {
    Project {
        id: "t2i-dashboard".to_string(),
        title: "T2I Trading Dashboard".to_string(),
        category: "Fintech / UI Design".to_string(),
        thumbnail: "projects/t2i/dashbaord_final.JPG".to_string(),
        description: "End-to-end design and engineering of a custom trading dashboard using \
                      Electron and Gains.trade API."
            .to_string(),
        details: ProjectDetail {
            story: "This project started with a vision for a comprehensive trading interface. \
                    Using a text-to-image implementation workflow, I iterated on the design \
                    using AI prompts before building the final electron application."
                .to_string(),
            tech: labels(&["Electron", "React", "Node.js", "Gains.trade API", "TwelveData"]),
            gallery: vec![
                GalleryItem::new(
                    "Phase 1",
                    "Initial Concept Generation: Defining the modular wireframe and data \
                     density. I started by asking for a layout inspired by Raydium and \
                     TradeStation.",
                )
                .with_title("Prompt Iteration 1")
                .with_align(Alignment::Left)
                .with_image("projects/t2i/Image_fx (34).jpg")
                .with_visual_content(embedded(T2I_PROMPT_34))
                .with_text_content(embedded(T2I_PROMPT_34)),
                GalleryItem::new(
                    "Phase 2",
                    "Refining the layout with neon glow accents and glassmorphic styles. I \
                     pushed for a darker, more premium look.",
                )
                .with_title("Refining Aesthetics")
                .with_align(Alignment::Right)
                .with_image("projects/t2i/Image_fx (35).jpg")
                .with_visual_content(embedded(T2I_PROMPT_34))
                .with_text_content(embedded(T2I_PROMPT_34)),
                GalleryItem::new(
                    "Phase 3",
                    "Exploring a more 'DeFi' aesthetic with rounded cards and softer shadows.",
                )
                .with_title("Alternative Concepts")
                .with_align(Alignment::Left)
                .with_image("projects/t2i/Image_fx (37).jpg")
                .with_visual_content(embedded(T2I_PROMPT_37))
                .with_text_content(embedded(T2I_PROMPT_37)),
                GalleryItem::new(
                    "Final Build",
                    "The final application delivered a pixel-perfect implementation of the \
                     generated designs, complete with real-time WebSocket data feeds and a \
                     fully functional backtesting interface.",
                )
                .with_title("Production Implementation")
                .with_align(Alignment::Center)
                .with_image("projects/t2i/dashbaord_final.JPG")
                .with_visual_content("Full tech stack: Electron, React, Node, Gains SDK..."),
            ],
        },
    }
}

fn viral_automation() -> Project {
    Project {
        id: "viral-automation".to_string(),
        title: "Viral Automation Workflow".to_string(),
        category: "Automation / AI".to_string(),
        thumbnail: "projects/viral/finalvideo.JPG".to_string(),
        description: "Interactive CLI workflow automating YouTube to TikTok video clipping with \
                      AI transcription."
            .to_string(),
        details: ProjectDetail {
            story: "A Python-based automation tool that takes long-form content and converts it \
                    into viral short-form clips using WhisperX for transcription and Gemini API \
                    for trend analysis."
                .to_string(),
            tech: labels(&["Python", "ffmpeg", "WhisperX", "Gemini API", "CLI"]),
            gallery: vec![
                GalleryItem::new(
                    "Step 1",
                    "The workflow begins by initializing the video processing engine.",
                )
                .with_title("CLI Initialization")
                .with_image("projects/viral/step1.JPG"),
                GalleryItem::new(
                    "Step 2",
                    "The AI analyzes video segments and timestamps for viral potential.",
                )
                .with_title("Segment Analysis")
                .with_image("projects/viral/step2.JPG"),
                GalleryItem::new("Step 3", "Generating frame-perfect subtitles using WhisperX.")
                    .with_title("Transcription")
                    .with_image("projects/viral/step3.JPG"),
                GalleryItem::new(
                    "Final Output",
                    "Final Output: A trendy, captioned short video ready for upload.",
                )
                .with_title("Rendered Clip")
                .with_image("projects/viral/finalvideo.JPG"),
            ],
        },
    }
}

fn specs_ai() -> Project {
    Project {
        id: "specs-ai".to_string(),
        title: "Specs Driven AI Dev".to_string(),
        category: "AI Engineering".to_string(),
        thumbnail: "projects/specs/specsdriven.JPG".to_string(),
        description: "Agentic workflow for generating robust technical specifications via AI \
                      chat iterations."
            .to_string(),
        details: ProjectDetail {
            story: "A meta-project demonstrating how to collaborate with LLMs to produce \
                    implementation-grade specifications. This process ensures high-quality code \
                    generation and architectural soundness."
                .to_string(),
            tech: labels(&["LLM Agents", "RAG", "Prompt Engineering"]),
            gallery: vec![
                GalleryItem::new(
                    "Step 1",
                    "Initial prompting for budget-conscious options backtesting. I provided \
                     specific constraints about using VectorBT and lacking ORATS data.",
                )
                .with_title("User Idea & Constraints")
                .with_align(Alignment::Left)
                .text_card(embedded(SPECS_RESPONSE_1))
                .with_text_content(embedded(SPECS_PROMPT_1)),
                GalleryItem::new(
                    "Step 2",
                    "Asking the agent to break down the first draft into a step-by-step \
                     execution plan for an engineer.",
                )
                .with_title("Implementation Planning")
                .with_align(Alignment::Left)
                .text_card(embedded(SPECS_RESPONSE_2))
                .with_text_content(embedded(SPECS_PROMPT_2)),
                GalleryItem::new(
                    "Step 3",
                    "Self-correction phase. I asked a secondary agent to critique the plan, \
                     which identified critical numerical stability issues with 0DTE options.",
                )
                .with_title("Agentic Critique")
                .with_align(Alignment::Left)
                .text_card(embedded(SPECS_RESPONSE_3))
                .with_text_content(embedded(SPECS_PROMPT_3)),
                GalleryItem::new(
                    "Final Artifact",
                    "The comprehensive implementation guide (Markdown) covering Phase 1 to \
                     Phase 7, ready for code generation.",
                )
                .with_title("The Master Plan")
                .with_align(Alignment::Center)
                .text_card(embedded(SPECS_FINAL_PLAN)),
            ],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::builtin_bundle;

    #[test]
    fn builtin_project_ids_are_unique() {
        let bundle = builtin_bundle();
        let mut ids = bundle
            .projects
            .iter()
            .map(|project| project.id.as_str())
            .collect::<Vec<_>>();
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }

    #[test]
    fn embedded_texts_are_trimmed_and_non_empty() {
        for project in builtin_bundle().projects {
            for item in project.details.gallery {
                for text in [item.visual_content(), item.text_content()]
                    .into_iter()
                    .flatten()
                {
                    assert!(!text.is_empty());
                    assert!(!text.ends_with('\n'));
                }
            }
        }
    }

    #[test]
    fn final_artifact_has_no_prompt() {
        let bundle = builtin_bundle();
        let specs = bundle
            .projects
            .iter()
            .find(|project| project.id == "specs-ai")
            .expect("specs project should exist");
        let last = specs
            .details
            .gallery
            .last()
            .expect("specs gallery should not be empty");
        assert!(last.is_text_card());
        assert_eq!(last.text_content(), None);
    }
}
