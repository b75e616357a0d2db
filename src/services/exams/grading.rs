//! 评分核心：对一次提交按题目做选项集合全等比较。
//!
//! 纯函数实现，不触碰存储层，便于单独测试。

use std::collections::HashMap;

use crate::models::exams::entities::{Choice, Question};
use crate::models::exams::responses::QuestionResult;

/// 一次评分的完整产出
#[derive(Debug, Clone, PartialEq)]
pub struct GradedExam {
    pub question_results: Vec<QuestionResult>,
    pub total_score: i64,
    pub passing_score: i64,
    pub passed: bool,
}

/// 对提交评分。
///
/// 每道题独立判定：选中集合与正确集合完全相等才得分（多选、漏选均不得分）。
/// 满分即及格线，总分达到满分才算通过。
/// 不属于本课程的选项ID直接忽略，不影响其余题目的判定。
pub fn grade_submission(
    questions: &[Question],
    choices: &[Choice],
    selected_choice_ids: &[i64],
) -> GradedExam {
    // 选项ID -> 题目ID 的索引只建一次，后续全部 O(1) 查询
    let mut question_of_choice: HashMap<i64, i64> = HashMap::with_capacity(choices.len());
    let mut correct_by_question: HashMap<i64, Vec<i64>> = HashMap::new();
    for choice in choices {
        question_of_choice.insert(choice.id, choice.question_id);
        if choice.is_correct {
            correct_by_question
                .entry(choice.question_id)
                .or_default()
                .push(choice.id);
        }
    }

    let mut selected_by_question: HashMap<i64, Vec<i64>> = HashMap::new();
    for &choice_id in selected_choice_ids {
        if let Some(&question_id) = question_of_choice.get(&choice_id) {
            selected_by_question
                .entry(question_id)
                .or_default()
                .push(choice_id);
        }
    }

    let mut question_results = Vec::with_capacity(questions.len());
    let mut total_score: i64 = 0;
    let mut passing_score: i64 = 0;

    for question in questions {
        let mut correct_ids = correct_by_question.remove(&question.id).unwrap_or_default();
        let mut selected_ids = selected_by_question
            .remove(&question.id)
            .unwrap_or_default();
        correct_ids.sort_unstable();
        selected_ids.sort_unstable();

        let is_correct = correct_ids == selected_ids;
        if is_correct {
            total_score += question.grade_point;
        }
        passing_score += question.grade_point;

        question_results.push(QuestionResult {
            question_text: question.question_text.clone(),
            is_correct,
            correct_choice_ids: correct_ids,
            selected_choice_ids: selected_ids,
        });
    }

    let passed = total_score >= passing_score;

    GradedExam {
        question_results,
        total_score,
        passing_score,
        passed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: i64, grade_point: i64) -> Question {
        Question {
            id,
            course_id: 1,
            question_text: format!("Question {}", id),
            grade_point,
        }
    }

    fn choice(id: i64, question_id: i64, is_correct: bool) -> Choice {
        Choice {
            id,
            question_id,
            choice_text: format!("Choice {}", id),
            is_correct,
        }
    }

    /// 两道题各5分，答对一道得5分，未达满分不通过
    #[test]
    fn test_partial_score_does_not_pass() {
        let questions = vec![question(1, 5), question(2, 5)];
        let choices = vec![
            choice(10, 1, true),
            choice(11, 1, false),
            choice(20, 2, true),
            choice(21, 2, false),
        ];

        let graded = grade_submission(&questions, &choices, &[10, 21]);

        assert_eq!(graded.total_score, 5);
        assert_eq!(graded.passing_score, 10);
        assert!(!graded.passed);
        assert!(graded.question_results[0].is_correct);
        assert!(!graded.question_results[1].is_correct);
    }

    /// 全部答对，总分等于满分，通过
    #[test]
    fn test_perfect_score_passes() {
        let questions = vec![question(1, 5), question(2, 5)];
        let choices = vec![
            choice(10, 1, true),
            choice(11, 1, false),
            choice(20, 2, true),
            choice(21, 2, true),
        ];

        let graded = grade_submission(&questions, &choices, &[10, 20, 21]);

        assert_eq!(graded.total_score, 10);
        assert_eq!(graded.passing_score, 10);
        assert!(graded.passed);
    }

    /// 多选：正确选项之外多选一项，该题不得分
    #[test]
    fn test_extra_selection_fails_question() {
        let questions = vec![question(1, 5)];
        let choices = vec![
            choice(10, 1, true),
            choice(11, 1, false),
        ];

        let graded = grade_submission(&questions, &choices, &[10, 11]);

        assert_eq!(graded.total_score, 0);
        assert!(!graded.question_results[0].is_correct);
        assert_eq!(graded.question_results[0].selected_choice_ids, vec![10, 11]);
    }

    /// 漏答的题目计入满分，不计入得分
    #[test]
    fn test_unanswered_question_counts_toward_passing_score() {
        let questions = vec![question(1, 5), question(2, 3)];
        let choices = vec![
            choice(10, 1, true),
            choice(20, 2, true),
        ];

        let graded = grade_submission(&questions, &choices, &[10]);

        assert_eq!(graded.total_score, 5);
        assert_eq!(graded.passing_score, 8);
        assert!(!graded.passed);
        assert!(graded.question_results[1].selected_choice_ids.is_empty());
    }

    /// 无正确选项的题目，空选视为全等，得分
    #[test]
    fn test_no_correct_choices_and_no_selection_matches() {
        let questions = vec![question(1, 2)];
        let choices = vec![choice(10, 1, false)];

        let graded = grade_submission(&questions, &choices, &[]);

        assert_eq!(graded.total_score, 2);
        assert!(graded.passed);
    }

    /// 不属于本课程的选项ID被忽略
    #[test]
    fn test_unknown_choice_ids_are_ignored() {
        let questions = vec![question(1, 5)];
        let choices = vec![choice(10, 1, true)];

        let graded = grade_submission(&questions, &choices, &[10, 9999]);

        assert_eq!(graded.total_score, 5);
        assert!(graded.passed);
        assert_eq!(graded.question_results[0].selected_choice_ids, vec![10]);
    }

    /// 同一提交重复评分产出完全一致的报告
    #[test]
    fn test_grading_is_deterministic() {
        let questions = vec![question(1, 5), question(2, 5)];
        let choices = vec![
            choice(10, 1, true),
            choice(11, 1, true),
            choice(20, 2, true),
        ];

        let first = grade_submission(&questions, &choices, &[11, 10, 20]);
        let second = grade_submission(&questions, &choices, &[20, 10, 11]);

        assert_eq!(first, second);
        assert_eq!(first.question_results[0].correct_choice_ids, vec![10, 11]);
        assert_eq!(first.question_results[0].selected_choice_ids, vec![10, 11]);
    }

    /// 零道题：满分为0，空提交也算通过
    #[test]
    fn test_empty_exam() {
        let graded = grade_submission(&[], &[], &[]);

        assert_eq!(graded.total_score, 0);
        assert_eq!(graded.passing_score, 0);
        assert!(graded.passed);
        assert!(graded.question_results.is_empty());
    }
}
