//! Development fixtures: random groups, a fixed course catalogue, and a
//! population of students with group and course assignments.

use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;
use sea_orm::{ActiveValue::Set, DatabaseConnection, EntityTrait, TransactionTrait};

use crate::error::AppError;

const FIRST_NAMES: &[&str] = &[
    "James", "Mary", "Robert", "Patricia", "John", "Jennifer", "Michael", "Linda", "David",
    "Elizabeth", "William", "Barbara", "Richard", "Susan", "Joseph", "Jessica", "Thomas", "Sarah",
    "Charles", "Karen",
];

const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson", "Thomas", "Taylor",
    "Moore", "Jackson", "Martin",
];

const COURSES: &[(&str, &str)] = &[
    ("Mathematics", "Algebra, calculus, and discrete mathematics"),
    ("Biology", "Cell biology, genetics, and ecology"),
    ("Physics", "Mechanics, thermodynamics, and electromagnetism"),
    ("Chemistry", "Organic and inorganic chemistry with lab work"),
    ("Computer Science", "Algorithms, data structures, and programming"),
    ("History", "World history from antiquity to the modern era"),
    ("Geography", "Physical and human geography"),
    ("English", "Grammar, composition, and literature"),
    ("Philosophy", "Logic, ethics, and the history of ideas"),
    ("Astronomy", "The solar system, stars, and galaxies"),
];

/// Tunables for fixture generation.
pub struct SeedConfig {
    pub group_count: usize,
    pub student_count: usize,
    pub min_group_size: usize,
    pub max_group_size: usize,
    pub min_courses_per_student: usize,
    pub max_courses_per_student: usize,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            group_count: 10,
            student_count: 200,
            min_group_size: 10,
            max_group_size: 30,
            min_courses_per_student: 1,
            max_courses_per_student: 3,
        }
    }
}

/// Generates a random group name of the form `AA-11`.
fn random_group_name<R: Rng>(rng: &mut R) -> String {
    let first = rng.random_range(b'A'..=b'Z') as char;
    let second = rng.random_range(b'A'..=b'Z') as char;
    let number = rng.random_range(10..100);
    format!("{}{}-{}", first, second, number)
}

/// Inserts generated fixtures in a single transaction.
///
/// Groups get random `AA-11` names, courses come from a fixed catalogue,
/// and students get random names. Each group receives a random number of
/// students between the configured bounds; students left over once every
/// group is full stay without a group. Every student is enrolled in a
/// random selection of courses.
///
/// # Arguments
/// - `db` - Database connection
/// - `cfg` - Generation bounds
///
/// # Returns
/// - `Ok(())` - All fixture rows committed
/// - `Err(AppError::DbErr)` - A fixture insert failed, nothing committed
pub async fn insert_fixtures(db: &DatabaseConnection, cfg: &SeedConfig) -> Result<(), AppError> {
    let mut rng = rand::rng();

    let groups: Vec<entity::group::ActiveModel> = (1..=cfg.group_count as i32)
        .map(|group_id| entity::group::ActiveModel {
            group_id: Set(group_id),
            name: Set(random_group_name(&mut rng)),
        })
        .collect();

    let courses: Vec<entity::course::ActiveModel> = COURSES
        .iter()
        .enumerate()
        .map(|(i, (name, description))| entity::course::ActiveModel {
            course_id: Set(i as i32 + 1),
            name: Set(name.to_string()),
            description: Set(description.to_string()),
        })
        .collect();

    // Fill each group up to its random capacity from a shuffled roster.
    // Students past the combined capacity remain ungrouped.
    let mut group_of_student: Vec<Option<i32>> = vec![None; cfg.student_count];
    let mut roster: Vec<usize> = (0..cfg.student_count).collect();
    roster.shuffle(&mut rng);
    let mut next = 0;
    for group_id in 1..=cfg.group_count as i32 {
        let capacity = rng.random_range(cfg.min_group_size..=cfg.max_group_size);
        for _ in 0..capacity {
            let Some(&student_index) = roster.get(next) else {
                break;
            };
            group_of_student[student_index] = Some(group_id);
            next += 1;
        }
    }

    let students: Vec<entity::student::ActiveModel> = (0..cfg.student_count)
        .map(|i| entity::student::ActiveModel {
            student_id: Set(i as i32 + 1),
            first_name: Set(FIRST_NAMES
                .choose(&mut rng)
                .copied()
                .unwrap_or("John")
                .to_string()),
            last_name: Set(LAST_NAMES
                .choose(&mut rng)
                .copied()
                .unwrap_or("Doe")
                .to_string()),
            group_id: Set(group_of_student[i]),
        })
        .collect();

    let course_ids: Vec<i32> = (1..=COURSES.len() as i32).collect();
    let mut enrollments: Vec<entity::student_course::ActiveModel> = Vec::new();
    for student_id in 1..=cfg.student_count as i32 {
        let picks = rng.random_range(cfg.min_courses_per_student..=cfg.max_courses_per_student);
        for &course_id in course_ids.choose_multiple(&mut rng, picks) {
            enrollments.push(entity::student_course::ActiveModel {
                student_id: Set(student_id),
                course_id: Set(course_id),
            });
        }
    }

    let txn = db.begin().await?;

    entity::group::Entity::insert_many(groups)
        .exec_without_returning(&txn)
        .await?;
    entity::course::Entity::insert_many(courses)
        .exec_without_returning(&txn)
        .await?;
    entity::student::Entity::insert_many(students)
        .exec_without_returning(&txn)
        .await?;
    entity::student_course::Entity::insert_many(enrollments)
        .exec_without_returning(&txn)
        .await?;

    txn.commit().await?;

    tracing::info!(
        "inserted {} groups, {} courses, and {} students",
        cfg.group_count,
        COURSES.len(),
        cfg.student_count
    );

    Ok(())
}
