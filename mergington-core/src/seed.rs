//! The roster the directory starts with.

use std::num::NonZeroU32;

use crate::models::Activity;

const fn seats(n: u32) -> NonZeroU32 {
    match NonZeroU32::new(n) {
        Some(n) => n,
        None => panic!("activity capacity must be positive"),
    }
}

pub fn default_activities() -> Vec<(String, Activity)> {
    vec![
        (
            "Chess Club".to_string(),
            Activity::new(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                seats(12),
            )
            .with_participants(["michael@mergington.edu", "daniel@mergington.edu"]),
        ),
        (
            "Programming Class".to_string(),
            Activity::new(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                seats(20),
            )
            .with_participants(["emma@mergington.edu", "sophia@mergington.edu"]),
        ),
        (
            "Gym Class".to_string(),
            Activity::new(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                seats(30),
            )
            .with_participants(["john@mergington.edu", "olivia@mergington.edu"]),
        ),
        (
            "Basketball".to_string(),
            Activity::new(
                "Practice drills and play in the inter-school league",
                "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
                seats(15),
            )
            .with_participants(["james@mergington.edu"]),
        ),
        (
            "Soccer".to_string(),
            Activity::new(
                "Team training and weekend matches against local schools",
                "Wednesdays, 3:30 PM - 5:00 PM",
                seats(22),
            )
            .with_participants(["lucas@mergington.edu", "mia@mergington.edu"]),
        ),
        (
            "Art Studio".to_string(),
            Activity::new(
                "Explore painting, drawing and sculpture",
                "Mondays, 3:30 PM - 5:00 PM",
                seats(18),
            )
            .with_participants(["amelia@mergington.edu"]),
        ),
        (
            "Drama Club".to_string(),
            Activity::new(
                "Rehearse and perform the school's seasonal productions",
                "Thursdays, 3:30 PM - 5:30 PM",
                seats(25),
            )
            .with_participants(["ava@mergington.edu", "ethan@mergington.edu"]),
        ),
        (
            "Robotics Club".to_string(),
            Activity::new(
                "Design, build and program robots for competitions",
                "Saturdays, 10:00 AM - 12:00 PM",
                seats(10),
            )
            .with_participants(["liam@mergington.edu"]),
        ),
        (
            "Debate Team".to_string(),
            Activity::new(
                "Develop public speaking and argumentation skills",
                "Wednesdays, 4:00 PM - 5:30 PM",
                seats(16),
            )
            .with_participants(["charlotte@mergington.edu", "noah@mergington.edu"]),
        ),
    ]
}
