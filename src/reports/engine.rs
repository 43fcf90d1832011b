//! Report computation engine
//!
//! Pure functions computing the aggregate reports from in-memory snapshots
//! of the entity tables. Nothing here touches the store: the caller hands in
//! slices, the engine joins them through id-keyed indexes and returns the
//! computed rows. This keeps the aggregation logic independent of the
//! storage engine and directly testable.
//!
//! Numeric policy: percentages and averages are rounded half-up to exactly
//! two decimals; any division whose denominator is zero yields 0.0.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::college::College;
use crate::models::event::Event;
use crate::models::registration::{Attendance, Feedback, Registration};
use crate::models::student::Student;

/// Default number of rows in the top-active-students report
pub const DEFAULT_TOP_ACTIVE_LIMIT: usize = 3;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventPopularityRow {
    pub event_id: i64,
    pub title: String,
    pub event_type: String,
    pub registrations: i32,
    pub college: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentParticipationRow {
    pub student_id: i64,
    pub name: String,
    pub email: String,
    pub college: String,
    pub total_registrations: i64,
    pub total_attended: i64,
    pub attendance_rate: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopActiveStudentRow {
    pub rank: usize,
    pub student_id: i64,
    pub name: String,
    pub email: String,
    pub college: String,
    pub events_attended: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventAnalyticsRow {
    pub event_id: i64,
    pub title: String,
    pub event_type: String,
    pub college: String,
    pub registrations: i32,
    pub attended: i64,
    pub attendance_rate: f64,
    pub avg_rating: f64,
}

/// Optional exact-match filters for the analytics report
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalyticsFilter {
    pub event_type: Option<String>,
    pub college_id: Option<i64>,
}

/// Round half-up (away from zero) to two decimal places
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Percentage of `part` in `whole`, rounded to two decimals; 0.0 when
/// `whole` is zero
fn percentage(part: i64, whole: i64) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    round2(part as f64 / whole as f64 * 100.0)
}

fn college_names(colleges: &[College]) -> HashMap<i64, &str> {
    colleges.iter().map(|c| (c.id, c.name.as_str())).collect()
}

/// Events joined with their college name, sorted descending by the stored
/// registration counter. Ties are broken by event id ascending so repeated
/// calls return identical order.
pub fn event_popularity(events: &[Event], colleges: &[College]) -> Vec<EventPopularityRow> {
    let names = college_names(colleges);

    let mut rows: Vec<EventPopularityRow> = events
        .iter()
        .map(|event| EventPopularityRow {
            event_id: event.id,
            title: event.title.clone(),
            event_type: event.event_type.clone(),
            registrations: event.current_registrations,
            college: names.get(&event.college_id).copied().unwrap_or_default().to_string(),
        })
        .collect();

    rows.sort_by(|a, b| {
        b.registrations
            .cmp(&a.registrations)
            .then(a.event_id.cmp(&b.event_id))
    });

    rows
}

/// Per-student registration and attendance totals. Left-join semantics:
/// students with no registrations appear with zero counts and a 0.0 rate.
/// Sorted descending by total registrations, ties by student id ascending.
pub fn student_participation(
    students: &[Student],
    colleges: &[College],
    registrations: &[Registration],
    attendance: &[Attendance],
) -> Vec<StudentParticipationRow> {
    let names = college_names(colleges);

    let mut registered: HashMap<i64, i64> = HashMap::new();
    let mut registration_student: HashMap<i64, i64> = HashMap::new();
    for r in registrations {
        *registered.entry(r.student_id).or_default() += 1;
        registration_student.insert(r.id, r.student_id);
    }

    let mut attended: HashMap<i64, i64> = HashMap::new();
    for record in attendance {
        if let Some(student_id) = registration_student.get(&record.registration_id) {
            *attended.entry(*student_id).or_default() += 1;
        }
    }

    let mut rows: Vec<StudentParticipationRow> = students
        .iter()
        .map(|student| {
            let total_registrations = registered.get(&student.id).copied().unwrap_or(0);
            let total_attended = attended.get(&student.id).copied().unwrap_or(0);
            StudentParticipationRow {
                student_id: student.id,
                name: student.name.clone(),
                email: student.email.clone(),
                college: names.get(&student.college_id).copied().unwrap_or_default().to_string(),
                total_registrations,
                total_attended,
                attendance_rate: percentage(total_attended, total_registrations),
            }
        })
        .collect();

    rows.sort_by(|a, b| {
        b.total_registrations
            .cmp(&a.total_registrations)
            .then(a.student_id.cmp(&b.student_id))
    });

    rows
}

/// The `limit` students with the most attended events. Inner-join
/// semantics: students with no attendance are excluded entirely. Rank is
/// 1-based in output order; ties are broken by student id ascending.
pub fn top_active_students(
    students: &[Student],
    colleges: &[College],
    registrations: &[Registration],
    attendance: &[Attendance],
    limit: usize,
) -> Vec<TopActiveStudentRow> {
    let participation = student_participation(students, colleges, registrations, attendance);

    let mut active: Vec<StudentParticipationRow> = participation
        .into_iter()
        .filter(|row| row.total_attended > 0)
        .collect();

    active.sort_by(|a, b| {
        b.total_attended
            .cmp(&a.total_attended)
            .then(a.student_id.cmp(&b.student_id))
    });

    active
        .into_iter()
        .take(limit)
        .enumerate()
        .map(|(i, row)| TopActiveStudentRow {
            rank: i + 1,
            student_id: row.student_id,
            name: row.name,
            email: row.email,
            college: row.college,
            events_attended: row.total_attended,
        })
        .collect()
}

/// Per-event attendance and rating aggregates, optionally filtered by exact
/// event type and/or college. Rows are emitted in event id order.
pub fn event_analytics(
    events: &[Event],
    colleges: &[College],
    registrations: &[Registration],
    attendance: &[Attendance],
    feedback: &[Feedback],
    filter: &AnalyticsFilter,
) -> Vec<EventAnalyticsRow> {
    let names = college_names(colleges);

    let registration_event: HashMap<i64, i64> =
        registrations.iter().map(|r| (r.id, r.event_id)).collect();

    let mut attended: HashMap<i64, i64> = HashMap::new();
    for record in attendance {
        if let Some(event_id) = registration_event.get(&record.registration_id) {
            *attended.entry(*event_id).or_default() += 1;
        }
    }

    // (rating sum, rating count) per event
    let mut ratings: HashMap<i64, (i64, i64)> = HashMap::new();
    for record in feedback {
        if let Some(event_id) = registration_event.get(&record.registration_id) {
            let entry = ratings.entry(*event_id).or_default();
            entry.0 += i64::from(record.rating);
            entry.1 += 1;
        }
    }

    let mut selected: Vec<&Event> = events
        .iter()
        .filter(|event| {
            filter
                .event_type
                .as_ref()
                .map_or(true, |event_type| &event.event_type == event_type)
        })
        .filter(|event| {
            filter.college_id.map_or(true, |college_id| event.college_id == college_id)
        })
        .collect();
    selected.sort_by_key(|event| event.id);

    selected
        .into_iter()
        .map(|event| {
            let total_attended = attended.get(&event.id).copied().unwrap_or(0);
            let avg_rating = match ratings.get(&event.id) {
                Some((sum, count)) if *count > 0 => round2(*sum as f64 / *count as f64),
                _ => 0.0,
            };
            EventAnalyticsRow {
                event_id: event.id,
                title: event.title.clone(),
                event_type: event.event_type.clone(),
                college: names.get(&event.college_id).copied().unwrap_or_default().to_string(),
                registrations: event.current_registrations,
                attended: total_attended,
                attendance_rate: percentage(total_attended, i64::from(event.current_registrations)),
                avg_rating,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn college(id: i64, name: &str) -> College {
        College {
            id,
            name: name.to_string(),
            location: None,
            contact_email: None,
            created_at: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    fn student(id: i64, college_id: i64, name: &str) -> Student {
        Student {
            id,
            college_id,
            student_code: format!("S{id:04}"),
            name: name.to_string(),
            email: format!("{}@campus.edu", name.to_lowercase().replace(' ', ".")),
            phone: None,
            year: Some(2),
            department: None,
            created_at: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    fn event(id: i64, college_id: i64, title: &str, registrations: i32) -> Event {
        let start = Utc.with_ymd_and_hms(2026, 4, 1, 10, 0, 0).unwrap();
        Event {
            id,
            college_id,
            title: title.to_string(),
            description: None,
            event_type: "Workshop".to_string(),
            start_datetime: start,
            end_datetime: start + chrono::Duration::hours(2),
            location: None,
            max_capacity: 100,
            current_registrations: registrations,
            status: "active".to_string(),
            created_at: start,
        }
    }

    fn registration(id: i64, event_id: i64, student_id: i64) -> Registration {
        Registration {
            id,
            event_id,
            student_id,
            registration_time: Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap(),
            status: "registered".to_string(),
        }
    }

    fn attendance_for(id: i64, registration_id: i64) -> Attendance {
        let t = Utc.with_ymd_and_hms(2026, 4, 1, 10, 5, 0).unwrap();
        Attendance {
            id,
            registration_id,
            check_in_time: t,
            check_out_time: None,
            created_at: t,
        }
    }

    fn feedback_for(id: i64, registration_id: i64, rating: i32) -> Feedback {
        Feedback {
            id,
            registration_id,
            rating,
            comments: None,
            submitted_at: Utc.with_ymd_and_hms(2026, 4, 1, 14, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_round2_half_up() {
        // 0.125 is exactly representable, so this pins the half-up choice
        assert_eq!(round2(0.125), 0.13);
        assert_eq!(round2(50.0), 50.0);
        assert_eq!(round2(66.666), 66.67);
        assert_eq!(round2(0.004), 0.0);
    }

    #[test]
    fn test_event_popularity_sorts_descending_with_stable_ties() {
        let colleges = vec![college(1, "City College")];
        let events = vec![
            event(1, 1, "Hackathon", 3),
            event(2, 1, "Robotics Workshop", 10),
            event(3, 1, "Tech Talk", 3),
        ];

        let rows = event_popularity(&events, &colleges);

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].event_id, 2);
        assert_eq!(rows[0].registrations, 10);
        assert_eq!(rows[0].college, "City College");
        // Tied events come out in id order, every time
        assert_eq!(rows[1].event_id, 1);
        assert_eq!(rows[2].event_id, 3);

        let again = event_popularity(&events, &colleges);
        let ids: Vec<i64> = rows.iter().map(|r| r.event_id).collect();
        let ids_again: Vec<i64> = again.iter().map(|r| r.event_id).collect();
        assert_eq!(ids, ids_again);
    }

    #[test]
    fn test_student_participation_rate() {
        let colleges = vec![college(1, "City College")];
        let students = vec![student(1, 1, "Rahul Gupta"), student(2, 1, "Anita Rao")];
        let registrations = vec![
            registration(1, 10, 1),
            registration(2, 11, 1),
            registration(3, 10, 2),
        ];
        // Student 1 attended one of two registered events
        let attendance = vec![attendance_for(1, 1)];

        let rows = student_participation(&students, &colleges, &registrations, &attendance);

        let rahul = rows.iter().find(|r| r.student_id == 1).unwrap();
        assert_eq!(rahul.total_registrations, 2);
        assert_eq!(rahul.total_attended, 1);
        assert_eq!(rahul.attendance_rate, 50.0);

        // Most-registered student sorts first
        assert_eq!(rows[0].student_id, 1);
    }

    #[test]
    fn test_student_participation_includes_zero_registration_students() {
        let colleges = vec![college(1, "City College")];
        let students = vec![student(1, 1, "Rahul Gupta"), student(2, 1, "Anita Rao")];
        let registrations = vec![registration(1, 10, 1)];

        let rows = student_participation(&students, &colleges, &registrations, &[]);

        assert_eq!(rows.len(), 2);
        let anita = rows.iter().find(|r| r.student_id == 2).unwrap();
        assert_eq!(anita.total_registrations, 0);
        assert_eq!(anita.total_attended, 0);
        assert_eq!(anita.attendance_rate, 0.0);
    }

    #[test]
    fn test_top_active_excludes_zero_attendance_and_ranks() {
        let colleges = vec![college(1, "City College")];
        let students: Vec<Student> = (1..=5).map(|i| student(i, 1, &format!("Student {i}"))).collect();

        // Attendance counts per student: [5, 4, 4, 2, 0]
        let mut registrations = Vec::new();
        let mut attendance = Vec::new();
        let mut next_reg = 1;
        let mut next_att = 1;
        for (student_id, attended) in [(1, 5), (2, 4), (3, 4), (4, 2), (5, 0)] {
            for event_id in 0..attended.max(1) {
                registrations.push(registration(next_reg, 100 + event_id, student_id));
                if event_id < attended {
                    attendance.push(attendance_for(next_att, next_reg));
                    next_att += 1;
                }
                next_reg += 1;
            }
        }

        let rows = top_active_students(&students, &colleges, &registrations, &attendance, 3);

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].rank, 1);
        assert_eq!(rows[0].student_id, 1);
        assert_eq!(rows[0].events_attended, 5);
        // Tie between students 2 and 3 resolves by id
        assert_eq!(rows[1].rank, 2);
        assert_eq!(rows[1].student_id, 2);
        assert_eq!(rows[2].rank, 3);
        assert_eq!(rows[2].student_id, 3);
        assert!(rows.iter().all(|r| r.student_id != 5));
    }

    #[test]
    fn test_top_active_limit_smaller_than_pool() {
        let colleges = vec![college(1, "City College")];
        let students = vec![student(1, 1, "A"), student(2, 1, "B")];
        let registrations = vec![registration(1, 10, 1), registration(2, 10, 2)];
        let attendance = vec![attendance_for(1, 1), attendance_for(2, 2)];

        let rows = top_active_students(&students, &colleges, &registrations, &attendance, 1);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].rank, 1);
    }

    #[test]
    fn test_event_analytics_avg_rating() {
        let colleges = vec![college(1, "City College")];
        let events = vec![event(1, 1, "Workshop", 2), event(2, 1, "Seminar", 0)];
        let registrations = vec![registration(1, 1, 1), registration(2, 1, 2)];
        let attendance = vec![attendance_for(1, 1), attendance_for(2, 2)];
        let feedback = vec![feedback_for(1, 1, 4), feedback_for(2, 2, 5)];

        let rows = event_analytics(
            &events,
            &colleges,
            &registrations,
            &attendance,
            &feedback,
            &AnalyticsFilter::default(),
        );

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].event_id, 1);
        assert_eq!(rows[0].avg_rating, 4.5);
        assert_eq!(rows[0].attended, 2);
        assert_eq!(rows[0].attendance_rate, 100.0);

        // No feedback and no registrations: both derived values stay 0.0
        assert_eq!(rows[1].avg_rating, 0.0);
        assert_eq!(rows[1].attendance_rate, 0.0);
    }

    #[test]
    fn test_event_analytics_filters() {
        let colleges = vec![college(1, "City College"), college(2, "Global Institute")];
        let mut seminar = event(2, 2, "Tech Symposium", 0);
        seminar.event_type = "Seminar".to_string();
        let events = vec![event(1, 1, "Robotics Workshop", 0), seminar];

        let by_type = event_analytics(
            &events,
            &colleges,
            &[],
            &[],
            &[],
            &AnalyticsFilter { event_type: Some("Seminar".to_string()), college_id: None },
        );
        assert_eq!(by_type.len(), 1);
        assert_eq!(by_type[0].event_id, 2);

        let by_college = event_analytics(
            &events,
            &colleges,
            &[],
            &[],
            &[],
            &AnalyticsFilter { event_type: None, college_id: Some(1) },
        );
        assert_eq!(by_college.len(), 1);
        assert_eq!(by_college[0].college, "City College");

        let by_both = event_analytics(
            &events,
            &colleges,
            &[],
            &[],
            &[],
            &AnalyticsFilter { event_type: Some("Seminar".to_string()), college_id: Some(1) },
        );
        assert!(by_both.is_empty());
    }
}
