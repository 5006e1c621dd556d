use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};

/// A stored question. Its `Serialize` form is the wire format every endpoint
/// returns: exactly `id`, `question`, `answer`, `category` and `difficulty`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Question {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
}

#[derive(Debug, Clone)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
}

pub async fn get_all_questions(pool: &SqlitePool) -> sqlx::Result<Vec<Question>> {
    sqlx::query_as::<_, Question>(
        r#"
        SELECT id, question, answer, category, difficulty FROM questions ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await
}

pub async fn get_question(pool: &SqlitePool, id: i64) -> sqlx::Result<Option<Question>> {
    sqlx::query_as::<_, Question>(
        r#"
        SELECT id, question, answer, category, difficulty FROM questions WHERE questions.id = ?1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn get_questions_for_category(
    pool: &SqlitePool,
    category: i64,
) -> sqlx::Result<Vec<Question>> {
    sqlx::query_as::<_, Question>(
        r#"
        SELECT id, question, answer, category, difficulty FROM questions
        WHERE questions.category = ?1
        ORDER BY id
        "#,
    )
    .bind(category)
    .fetch_all(pool)
    .await
}

/// Case-insensitive substring match on the question text, with Unicode case
/// folding. The term is matched literally.
pub async fn search_questions(pool: &SqlitePool, term: &str) -> sqlx::Result<Vec<Question>> {
    let needle = term.to_lowercase();
    let questions = get_all_questions(pool).await?;
    Ok(questions
        .into_iter()
        .filter(|q| q.question.to_lowercase().contains(&needle))
        .collect())
}

pub async fn count_questions(pool: &SqlitePool) -> sqlx::Result<i64> {
    sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(*) FROM questions
        "#,
    )
    .fetch_one(pool)
    .await
}

pub async fn create_question(pool: &SqlitePool, question: &NewQuestion) -> sqlx::Result<i64> {
    let id = sqlx::query(
        r#"
        INSERT INTO questions (question, answer, category, difficulty) VALUES (?1, ?2, ?3, ?4)
        "#,
    )
    .bind(&question.question)
    .bind(&question.answer)
    .bind(question.category)
    .bind(question.difficulty)
    .execute(pool)
    .await?
    .last_insert_rowid();

    Ok(id)
}

pub async fn delete_question(pool: &SqlitePool, id: i64) -> sqlx::Result<u64> {
    let deleted = sqlx::query(
        r#"
        DELETE FROM questions WHERE questions.id = ?1
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?
    .rows_affected();

    Ok(deleted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_support::{seeded_pool, test_pool};

    fn new_question(question: &str, category: i64) -> NewQuestion {
        NewQuestion {
            question: question.to_owned(),
            answer: "answer".to_owned(),
            category,
            difficulty: 1,
        }
    }

    #[tokio::test]
    async fn create_get_delete() {
        let pool = test_pool().await;
        let id = create_question(&pool, &new_question("Who?", 2))
            .await
            .unwrap();

        let stored = get_question(&pool, id).await.unwrap().unwrap();
        assert_eq!(stored.question, "Who?");
        assert_eq!(stored.category, 2);

        assert_eq!(delete_question(&pool, id).await.unwrap(), 1);
        assert!(get_question(&pool, id).await.unwrap().is_none());
        assert_eq!(delete_question(&pool, id).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn category_is_not_checked() {
        let pool = test_pool().await;
        create_question(&pool, &new_question("Orphan", 999))
            .await
            .unwrap();
        assert_eq!(
            get_questions_for_category(&pool, 999).await.unwrap().len(),
            1
        );
    }

    #[tokio::test]
    async fn search_ignores_case() {
        let pool = seeded_pool().await;
        let found = search_questions(&pool, "HUMAN").await.unwrap();
        assert_eq!(found.len(), 1);
        assert!(found[0].question.to_lowercase().contains("human"));
    }

    #[tokio::test]
    async fn search_empty_term_matches_everything() {
        let pool = seeded_pool().await;
        let all = search_questions(&pool, "").await.unwrap();
        assert_eq!(all.len() as i64, count_questions(&pool).await.unwrap());
    }

    #[tokio::test]
    async fn search_treats_wildcards_literally() {
        let pool = test_pool().await;
        create_question(&pool, &new_question("100% sure?", 1))
            .await
            .unwrap();
        create_question(&pool, &new_question("1000 sure?", 1))
            .await
            .unwrap();

        let found = search_questions(&pool, "0%").await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].question, "100% sure?");
        assert!(search_questions(&pool, "_").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn search_folds_non_ascii_case() {
        let pool = test_pool().await;
        create_question(&pool, &new_question("Où est l'ÉCOLE?", 3))
            .await
            .unwrap();

        let found = search_questions(&pool, "école").await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].question, "Où est l'ÉCOLE?");
        assert_eq!(search_questions(&pool, "OÙ").await.unwrap().len(), 1);
    }

    #[test]
    fn formatted_question_has_five_fields() {
        let question = Question {
            id: 1,
            question: "q".to_owned(),
            answer: "a".to_owned(),
            category: 2,
            difficulty: 3,
        };
        let value = serde_json::to_value(&question).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 5);
        for key in ["id", "question", "answer", "category", "difficulty"] {
            assert!(object.contains_key(key), "missing {key}");
        }
    }
}
