use thiserror::Error;

use crate::config::DF;

/// A single knowledge-check question. Immutable, defined at load time.
pub struct Question {
    pub id: u32,
    pub text: &'static str,
    pub options: [&'static str; 4],
    pub correct_answer: usize,
    pub explanation: &'static str,
}

/// Rejections for inputs that can only originate from a view-layer bug.
/// Boundary navigation clamps silently and never lands here.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuizError {
    #[error("answer option {0} is out of range (expected 0..4)")]
    OptionOutOfRange(usize),
    #[error("the test is already completed")]
    AlreadyCompleted,
    #[error("the current question has no selected answer")]
    CurrentUnanswered,
}

pub struct QuizEngine {
    questions: &'static [Question],
    current: usize,
    selected: Vec<Option<usize>>,
    explanation_visible: bool,
    final_score: Option<usize>,
}

impl QuizEngine {
    pub fn new(questions: &'static [Question]) -> Self {
        Self {
            questions,
            current: 0,
            selected: vec![None; questions.len()],
            explanation_visible: false,
            final_score: None,
        }
    }

    pub fn questions(&self) -> &'static [Question] {
        self.questions
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_question(&self) -> &'static Question {
        &self.questions[self.current]
    }

    pub fn selected(&self, question: usize) -> Option<usize> {
        self.selected.get(question).copied().flatten()
    }

    pub fn current_selected(&self) -> Option<usize> {
        self.selected(self.current)
    }

    pub fn is_current_answered(&self) -> bool {
        self.current_selected().is_some()
    }

    /// Derived, never stored: whether the selection on `question` is right.
    pub fn is_correct(&self, question: usize) -> Option<bool> {
        let picked = self.selected(question)?;
        Some(picked == self.questions[question].correct_answer)
    }

    pub fn explanation_visible(&self) -> bool {
        self.explanation_visible
    }

    pub fn completed(&self) -> bool {
        self.final_score.is_some()
    }

    /// Overwrite the selection for the current question. Changing one's
    /// mind before completing is allowed.
    pub fn select_answer(&mut self, option: usize) -> Result<(), QuizError> {
        if self.completed() {
            return Err(QuizError::AlreadyCompleted);
        }
        if option >= self.current_question().options.len() {
            return Err(QuizError::OptionOutOfRange(option));
        }
        self.selected[self.current] = Some(option);
        Ok(())
    }

    /// Clamped; moving away keeps the question's selection intact.
    pub fn next_question(&mut self) {
        if self.current + 1 < self.questions.len() {
            self.current += 1;
            self.explanation_visible = false;
        }
    }

    pub fn previous_question(&mut self) {
        if self.current > 0 {
            self.current -= 1;
            self.explanation_visible = false;
        }
    }

    /// Only meaningful when the current question has a selection; the view
    /// disables the control otherwise.
    pub fn toggle_explanation(&mut self) {
        self.explanation_visible = !self.explanation_visible;
    }

    /// Pure recount of correct selections. Unanswered never counts.
    pub fn score(&self) -> usize {
        self.selected
            .iter()
            .zip(self.questions.iter())
            .filter(|(picked, q)| **picked == Some(q.correct_answer))
            .count()
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn on_last_question(&self) -> bool {
        self.current + 1 == self.questions.len()
    }

    /// Freeze the result. The first successful call fixes the score;
    /// later calls return the same value regardless of anything else.
    pub fn complete(&mut self) -> Result<usize, QuizError> {
        if let Some(score) = self.final_score {
            return Ok(score);
        }
        if !self.is_current_answered() {
            return Err(QuizError::CurrentUnanswered);
        }
        let score = self.score();
        self.final_score = Some(score);
        if DF.log_quiz {
            log::info!("Knowledge check completed: {}/{}", score, self.questions.len());
        }
        Ok(score)
    }

    /// The frozen result, once `complete` has succeeded.
    pub fn final_score(&self) -> Option<usize> {
        self.final_score
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::QUESTIONS;

    fn engine() -> QuizEngine {
        QuizEngine::new(QUESTIONS)
    }

    fn answer_all_correct(quiz: &mut QuizEngine) {
        for i in 0..quiz.question_count() {
            let correct = quiz.questions()[i].correct_answer;
            quiz.select_answer(correct).unwrap();
            quiz.next_question();
        }
    }

    #[test]
    fn test_bank_has_ten_well_formed_questions() {
        let quiz = engine();
        assert_eq!(quiz.question_count(), 10);
        for q in quiz.questions() {
            assert!(q.correct_answer < q.options.len());
            assert!(!q.text.is_empty());
            assert!(!q.explanation.is_empty());
        }
    }

    #[test]
    fn test_out_of_range_answer_is_rejected() {
        let mut quiz = engine();
        assert_eq!(quiz.select_answer(4), Err(QuizError::OptionOutOfRange(4)));
        assert_eq!(quiz.current_selected(), None);
    }

    #[test]
    fn test_question_navigation_clamps_and_keeps_selections() {
        let mut quiz = engine();
        quiz.previous_question();
        assert_eq!(quiz.current_index(), 0);

        quiz.select_answer(1).unwrap();
        quiz.next_question();
        quiz.previous_question();
        assert_eq!(quiz.selected(0), Some(1), "selection survives navigation");

        for _ in 0..20 {
            quiz.next_question();
        }
        assert_eq!(quiz.current_index(), 9);
    }

    #[test]
    fn test_score_counts_only_correct_selections() {
        let mut quiz = engine();
        assert_eq!(quiz.score(), 0, "nothing answered, nothing scored");

        // Correct answers on questions 0, 2 and 4 only
        for target in [0usize, 2, 4] {
            while quiz.current_index() < target {
                quiz.next_question();
            }
            while quiz.current_index() > target {
                quiz.previous_question();
            }
            let correct = quiz.questions()[target].correct_answer;
            quiz.select_answer(correct).unwrap();
        }
        assert_eq!(quiz.score(), 3);
    }

    #[test]
    fn test_score_is_order_independent() {
        // Same selections made in a different visiting order give the same score
        let mut in_order = engine();
        for i in 0..3 {
            let correct = in_order.questions()[i].correct_answer;
            in_order.select_answer(correct).unwrap();
            in_order.next_question();
        }

        let mut shuffled = engine();
        for target in [2usize, 0, 1] {
            while shuffled.current_index() < target {
                shuffled.next_question();
            }
            while shuffled.current_index() > target {
                shuffled.previous_question();
            }
            let correct = shuffled.questions()[target].correct_answer;
            shuffled.select_answer(correct).unwrap();
        }
        assert_eq!(in_order.score(), shuffled.score());
    }

    #[test]
    fn test_perfect_run_scores_ten() {
        let mut quiz = engine();
        answer_all_correct(&mut quiz);
        assert_eq!(quiz.score(), 10);
        assert_eq!(quiz.complete(), Ok(10));
    }

    #[test]
    fn test_complete_requires_an_answer() {
        let mut quiz = engine();
        assert_eq!(quiz.complete(), Err(QuizError::CurrentUnanswered));
        assert!(!quiz.completed());
    }

    #[test]
    fn test_complete_is_idempotent_and_freezes_score() {
        let mut quiz = engine();
        answer_all_correct(&mut quiz);
        assert_eq!(quiz.complete(), Ok(10));

        // Hypothetical post-completion mutation must not leak into the result
        quiz.selected[0] = None;
        quiz.selected[1] = None;
        assert_eq!(quiz.complete(), Ok(10));
        assert_eq!(quiz.final_score(), Some(10));

        // And the public mutation path is closed entirely
        assert_eq!(quiz.select_answer(0), Err(QuizError::AlreadyCompleted));
    }

    #[test]
    fn test_correctness_is_derived_per_selection() {
        let mut quiz = engine();
        let correct = quiz.questions()[0].correct_answer;
        let wrong = (correct + 1) % 4;

        assert_eq!(quiz.is_correct(0), None);
        quiz.select_answer(wrong).unwrap();
        assert_eq!(quiz.is_correct(0), Some(false));
        quiz.select_answer(correct).unwrap();
        assert_eq!(quiz.is_correct(0), Some(true));
    }

    #[test]
    fn test_explanation_flag_resets_on_navigation() {
        let mut quiz = engine();
        quiz.select_answer(0).unwrap();
        quiz.toggle_explanation();
        assert!(quiz.explanation_visible());
        quiz.next_question();
        assert!(!quiz.explanation_visible());
    }
}
