/// Quiz question slide encoding
///
/// Quiz questions travel inside the quiz's free-text `content` field as
/// HTML slides separated by [`SLIDE_SEPARATOR`]. The admin console is both
/// producer and consumer of this encoding: [`render`] builds the HTML from
/// structured questions and [`parse`] recovers them for editing.
///
/// Parsing is best-effort. Learner-facing views only display the HTML, so
/// a slide this module cannot fully recover degrades to a blank
/// multiple-choice skeleton instead of failing the whole quiz.
///
/// # Example
///
/// ```
/// use edudash_core::quiz_content::{parse, render, QuizQuestion};
///
/// let questions = vec![QuizQuestion::multiple_choice(
///     "Ownership",
///     "Which call moves the value?",
/// )];
/// let html = render(&questions);
/// let recovered = parse(&html);
///
/// assert_eq!(recovered.len(), 1);
/// assert_eq!(recovered[0].title, "Ownership");
/// ```
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// Marker placed between question slides
pub const SLIDE_SEPARATOR: &str = "<hr class=\"slide-separator\" />";

lazy_static! {
    static ref TITLE_RE: Regex =
        Regex::new(r"(?s)<h3>Question \d+: (.*?)</h3>").unwrap();
    static ref KIND_RE: Regex =
        Regex::new(r#"data-question-kind="([a-z_]+)""#).unwrap();
    static ref PROMPT_RE: Regex =
        Regex::new(r#"(?s)<p class="question-prompt">(.*?)</p>"#).unwrap();
    static ref POINTS_RE: Regex =
        Regex::new(r#"<p class="question-points">(\d+) points?</p>"#).unwrap();
    static ref CHOICE_RE: Regex = Regex::new(
        r#"(?s)<li data-choice-id="([A-Z])" data-correct="(true|false)">(.*?)</li>"#
    )
    .unwrap();
}

/// Kind of quiz question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    /// One correct choice among several
    MultipleChoice,

    /// True or false
    TrueFalse,

    /// Free-text answer graded against an expected string
    ShortAnswer,

    /// Long-form answer graded manually
    Essay,
}

impl QuestionKind {
    /// Wire representation, as stored in the slide's data attribute
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionKind::MultipleChoice => "multiple_choice",
            QuestionKind::TrueFalse => "true_false",
            QuestionKind::ShortAnswer => "short_answer",
            QuestionKind::Essay => "essay",
        }
    }

    /// Parses the data-attribute form; unknown kinds are not an error here,
    /// the caller decides how to degrade
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "multiple_choice" => Some(QuestionKind::MultipleChoice),
            "true_false" => Some(QuestionKind::TrueFalse),
            "short_answer" => Some(QuestionKind::ShortAnswer),
            "essay" => Some(QuestionKind::Essay),
            _ => None,
        }
    }

    /// Uppercase label shown on the slide for non-choice kinds
    pub fn label(&self) -> &'static str {
        match self {
            QuestionKind::MultipleChoice => "MULTIPLE CHOICE",
            QuestionKind::TrueFalse => "TRUE / FALSE",
            QuestionKind::ShortAnswer => "SHORT ANSWER",
            QuestionKind::Essay => "ESSAY",
        }
    }
}

/// One answer choice on a multiple-choice or true/false question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    /// Choice letter ('A' through 'D')
    pub id: char,

    /// Choice text
    pub text: String,

    /// Whether this is the correct answer
    pub correct: bool,
}

/// A structured quiz question, the editing-side view of one slide
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    /// Question title shown in the slide heading
    pub title: String,

    /// Question prompt text
    pub prompt: String,

    /// Kind of question
    pub kind: QuestionKind,

    /// Points awarded for a correct answer
    pub points: u32,

    /// Answer choices; empty for short-answer and essay questions
    pub choices: Vec<Choice>,
}

impl QuizQuestion {
    /// A fresh multiple-choice question with four blank choices, A correct
    pub fn multiple_choice(title: &str, prompt: &str) -> Self {
        Self {
            title: title.to_string(),
            prompt: prompt.to_string(),
            kind: QuestionKind::MultipleChoice,
            points: 1,
            choices: ('A'..='D')
                .map(|id| Choice {
                    id,
                    text: String::new(),
                    correct: id == 'A',
                })
                .collect(),
        }
    }

    /// A true/false question with the stated answer
    pub fn true_false(title: &str, prompt: &str, answer: bool) -> Self {
        Self {
            title: title.to_string(),
            prompt: prompt.to_string(),
            kind: QuestionKind::TrueFalse,
            points: 1,
            choices: vec![
                Choice {
                    id: 'A',
                    text: "True".to_string(),
                    correct: answer,
                },
                Choice {
                    id: 'B',
                    text: "False".to_string(),
                    correct: !answer,
                },
            ],
        }
    }

    /// The blank skeleton a malformed slide degrades to
    fn skeleton() -> Self {
        Self::multiple_choice("Untitled question", "")
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn unescape(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

/// Renders structured questions into the slide HTML the backend stores
///
/// Question numbering is 1-based in display order. The separator appears
/// between slides only, never after the last one.
pub fn render(questions: &[QuizQuestion]) -> String {
    let mut html = String::new();

    for (index, question) in questions.iter().enumerate() {
        if index > 0 {
            html.push('\n');
            html.push_str(SLIDE_SEPARATOR);
            html.push('\n');
        }

        let _ = writeln!(
            html,
            "<div class=\"module-slide\" data-question-kind=\"{}\">",
            question.kind.as_str()
        );
        let _ = writeln!(
            html,
            "<h3>Question {}: {}</h3>",
            index + 1,
            escape(&question.title)
        );
        if question.kind != QuestionKind::MultipleChoice {
            let _ = writeln!(
                html,
                "<p class=\"question-kind\">{}</p>",
                question.kind.label()
            );
        }
        let _ = writeln!(
            html,
            "<p class=\"question-prompt\">{}</p>",
            escape(&question.prompt)
        );

        if !question.choices.is_empty() {
            html.push_str("<ul class=\"question-choices\">\n");
            for choice in &question.choices {
                let _ = writeln!(
                    html,
                    "<li data-choice-id=\"{}\" data-correct=\"{}\">{}</li>",
                    choice.id,
                    choice.correct,
                    escape(&choice.text)
                );
            }
            html.push_str("</ul>\n");
        }

        let unit = if question.points == 1 { "point" } else { "points" };
        let _ = writeln!(
            html,
            "<p class=\"question-points\">{} {}</p>",
            question.points, unit
        );
        html.push_str("</div>");
    }

    html
}

/// Parses slide HTML back into structured questions, best-effort
///
/// Empty content yields an empty list. Each slide is recovered
/// independently; a slide with no recognizable heading becomes a blank
/// multiple-choice skeleton so the editor always has something to show.
pub fn parse(content: &str) -> Vec<QuizQuestion> {
    if content.trim().is_empty() {
        return Vec::new();
    }

    content
        .split(SLIDE_SEPARATOR)
        .map(str::trim)
        .filter(|slide| !slide.is_empty())
        .map(parse_slide)
        .collect()
}

fn parse_slide(slide: &str) -> QuizQuestion {
    let title = match TITLE_RE.captures(slide) {
        Some(caps) => unescape(caps[1].trim()),
        None => return QuizQuestion::skeleton(),
    };

    let kind = KIND_RE
        .captures(slide)
        .and_then(|caps| QuestionKind::parse(&caps[1]))
        .unwrap_or(QuestionKind::MultipleChoice);

    let prompt = PROMPT_RE
        .captures(slide)
        .map(|caps| unescape(caps[1].trim()))
        .unwrap_or_default();

    let points = POINTS_RE
        .captures(slide)
        .and_then(|caps| caps[1].parse().ok())
        .unwrap_or(1);

    let choices: Vec<Choice> = CHOICE_RE
        .captures_iter(slide)
        .filter_map(|caps| {
            let id = caps[1].chars().next()?;
            Some(Choice {
                id,
                text: unescape(caps[3].trim()),
                correct: &caps[2] == "true",
            })
        })
        .collect();

    QuizQuestion {
        title,
        prompt,
        kind,
        points,
        choices,
    }
}
