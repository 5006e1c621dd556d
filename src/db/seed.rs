//! CSV import/export and the bundled trivia data set.

use std::io::{Read, Write};
use std::path::Path;

use anyhow::Context;
use serde::de::DeserializeOwned;
use serde::Serialize;
use sqlx::SqlitePool;

use super::queries::categories::get_all_categories;
use super::queries::questions::{count_questions, get_all_questions};
use super::{Category, Question};

const BUNDLED_CATEGORIES: &str = include_str!("../../seed/categories.csv");
const BUNDLED_QUESTIONS: &str = include_str!("../../seed/questions.csv");

const CATEGORIES_FILE: &str = "categories.csv";
const QUESTIONS_FILE: &str = "questions.csv";

pub fn read_csv<T: DeserializeOwned>(reader: impl Read) -> anyhow::Result<Vec<T>> {
    let mut rdr = csv::Reader::from_reader(reader);
    let mut out = Vec::new();
    for record in rdr.deserialize() {
        let record: T = record?;
        out.push(record);
    }
    Ok(out)
}

pub fn write_csv<T: Serialize>(writer: impl Write, data: &[T]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for line in data {
        wtr.serialize(line)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Replaces the contents of both tables, keeping the given ids.
pub async fn import(
    pool: &SqlitePool,
    categories: Vec<Category>,
    questions: Vec<Question>,
) -> sqlx::Result<()> {
    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM questions").execute(&mut *tx).await?;
    sqlx::query("DELETE FROM categories")
        .execute(&mut *tx)
        .await?;

    for category in categories {
        sqlx::query(
            r#"
            INSERT INTO categories (id, type) VALUES (?1, ?2)
            "#,
        )
        .bind(category.id)
        .bind(category.kind)
        .execute(&mut *tx)
        .await?;
    }
    for question in questions {
        sqlx::query(
            r#"
            INSERT INTO questions (id, question, answer, category, difficulty)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(question.id)
        .bind(question.question)
        .bind(question.answer)
        .bind(question.category)
        .bind(question.difficulty)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await
}

/// Loads the bundled data set into an empty database. Returns `false` and
/// leaves the store alone if it already holds data.
pub async fn load_bundled(pool: &SqlitePool) -> anyhow::Result<bool> {
    if count_questions(pool).await? > 0 || !get_all_categories(pool).await?.is_empty() {
        return Ok(false);
    }
    let categories: Vec<Category> = read_csv(BUNDLED_CATEGORIES.as_bytes())?;
    let questions: Vec<Question> = read_csv(BUNDLED_QUESTIONS.as_bytes())?;
    tracing::info!(
        categories = categories.len(),
        questions = questions.len(),
        "Loading bundled data set"
    );
    import(pool, categories, questions).await?;
    Ok(true)
}

pub async fn import_dir(pool: &SqlitePool, path: &Path) -> anyhow::Result<()> {
    let categories_path = path.join(CATEGORIES_FILE);
    let questions_path = path.join(QUESTIONS_FILE);
    let categories: Vec<Category> = read_csv(
        std::fs::File::open(&categories_path)
            .with_context(|| format!("Cannot open {}", categories_path.display()))?,
    )?;
    let questions: Vec<Question> = read_csv(
        std::fs::File::open(&questions_path)
            .with_context(|| format!("Cannot open {}", questions_path.display()))?,
    )?;
    import(pool, categories, questions).await?;
    Ok(())
}

pub async fn export_dir(pool: &SqlitePool, path: &Path) -> anyhow::Result<()> {
    let categories = get_all_categories(pool).await?;
    let questions = get_all_questions(pool).await?;
    if !path.exists() {
        std::fs::create_dir_all(path)?
    }
    write_csv(std::fs::File::create(path.join(CATEGORIES_FILE))?, &categories)?;
    write_csv(std::fs::File::create(path.join(QUESTIONS_FILE))?, &questions)?;
    Ok(())
}
