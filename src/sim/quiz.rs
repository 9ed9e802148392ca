//! Department quiz overlay
//!
//! While a quiz is open it owns every click: answers advance the question
//! index, and the Continue button on the results screen hands the score
//! back to the session.

use glam::Vec2;
use thiserror::Error;

use crate::catalog::{Question, StationDescriptor, StationId};
use crate::ui::layout;

/// Why a quiz could not be opened
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    #[error("a quiz for station {0} is already open")]
    AlreadyActive(StationId),

    #[error("station {0} has no questions")]
    NoQuestions(StationId),
}

/// Which screen of the overlay is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    Inactive,
    Question,
    Results,
}

/// Final tally of one quiz
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizResult {
    pub station: StationId,
    pub correct: u32,
    pub total: u32,
}

/// What a click inside the overlay did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizClick {
    /// Outside every hit-region
    Ignored,
    /// An answer was picked
    Answered { correct: bool },
    /// Continue pressed on the results screen
    Finished(QuizResult),
}

/// One station's quiz in progress
#[derive(Debug, Clone)]
pub struct QuizSession {
    pub station: StationId,
    pub title: String,
    questions: Vec<Question>,
    /// Index of the question on screen; equal to the question count once
    /// the results are showing
    index: usize,
    correct: u32,
}

impl QuizSession {
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn correct(&self) -> u32 {
        self.correct
    }

    pub fn total(&self) -> u32 {
        self.questions.len() as u32
    }

    /// Question currently on screen (None on the results screen)
    pub fn current(&self) -> Option<&Question> {
        self.questions.get(self.index)
    }

    pub fn is_finished(&self) -> bool {
        self.index >= self.questions.len()
    }

    /// "Q2/5: text" header line
    pub fn question_label(&self) -> Option<String> {
        self.current().map(|q| {
            format!("Q{}/{}: {}", self.index + 1, self.questions.len(), q.text)
        })
    }

    /// "Correct: 3 / 5" results line
    pub fn results_label(&self) -> String {
        format!("Correct: {} / {}", self.correct, self.questions.len())
    }

    pub fn results_title(&self) -> String {
        format!("{} - RESULTS", self.title)
    }

    fn result(&self) -> QuizResult {
        QuizResult {
            station: self.station,
            correct: self.correct,
            total: self.total(),
        }
    }
}

/// The quiz overlay state machine
#[derive(Debug, Clone, Default)]
pub struct Quiz {
    session: Option<QuizSession>,
}

impl Quiz {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> QuizPhase {
        match &self.session {
            None => QuizPhase::Inactive,
            Some(s) if s.is_finished() => QuizPhase::Results,
            Some(_) => QuizPhase::Question,
        }
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&QuizSession> {
        self.session.as_ref()
    }

    /// Open the quiz for a station
    pub fn open(&mut self, station: &StationDescriptor) -> Result<(), QuizError> {
        if let Some(active) = &self.session {
            return Err(QuizError::AlreadyActive(active.station));
        }
        if station.questions.is_empty() {
            return Err(QuizError::NoQuestions(station.id));
        }

        self.session = Some(QuizSession {
            station: station.id,
            title: station.title.clone(),
            questions: station.questions.clone(),
            index: 0,
            correct: 0,
        });
        log::info!("Quiz opened: {} ({})", station.title, station.id);
        Ok(())
    }

    /// Force the overlay shut without reporting a result
    pub fn close(&mut self) {
        if let Some(session) = self.session.take() {
            log::debug!("Quiz for {} closed early", session.station);
        }
    }

    /// Route a click to the current screen
    pub fn click(&mut self, pos: Vec2) -> QuizClick {
        let Some(session) = self.session.as_mut() else {
            return QuizClick::Ignored;
        };

        let Some(question) = session.current() else {
            if !layout::continue_button().contains(pos) {
                return QuizClick::Ignored;
            }
            let result = session.result();
            self.session = None;
            log::info!(
                "Quiz finished: {} scored {}/{}",
                result.station,
                result.correct,
                result.total
            );
            return QuizClick::Finished(result);
        };

        let hit = (0..question.answers.len()).find(|&i| layout::answer_rect(i).contains(pos));
        let Some(choice) = hit else {
            return QuizClick::Ignored;
        };

        let correct = choice == question.correct;
        if correct {
            session.correct += 1;
        }
        session.index += 1;
        QuizClick::Answered { correct }
    }
}
