//! Narrative element tables and availability queries.

use alibi_core::{Availability, DateWindow, NarrativeElement};

/// Maximum number of narrative elements a single request may select.
pub const MAX_NARRATIVE_ELEMENTS: usize = 3;

/// Elements available on every calendar day.
pub const ALWAYS_AVAILABLE_ELEMENTS: &[NarrativeElement] = &[
    NarrativeElement {
        id: "barrister-pigeon",
        label: "Barrister Pigeon",
        prompt_fragment: "a pigeon wearing a barrister's wig",
        availability: Availability::Always,
    },
    NarrativeElement {
        id: "suspicious-duck",
        label: "Suspicious Duck",
        prompt_fragment: "a suspicious-looking duck",
        availability: Availability::Always,
    },
    NarrativeElement {
        id: "shifty-dog",
        label: "Dog with Shifty Eyes",
        prompt_fragment: "a dog with shifty, suspicious eyes",
        availability: Availability::Always,
    },
    NarrativeElement {
        id: "victorian-gentleman",
        label: "Victorian Gentleman",
        prompt_fragment: "a Victorian gentleman in a top hat and monocle",
        availability: Availability::Always,
    },
    NarrativeElement {
        id: "alien-involvement",
        label: "Alien Involvement",
        prompt_fragment: "alien presence or extraterrestrial technology",
        availability: Availability::Always,
    },
    NarrativeElement {
        id: "freak-weather",
        label: "Freak Weather",
        prompt_fragment: "impossibly specific freak weather event (sideways hail, localized tornado, etc.)",
        availability: Availability::Always,
    },
    NarrativeElement {
        id: "robot-malfunction",
        label: "Robot Malfunction",
        prompt_fragment: "a malfunctioning robot or AI system",
        availability: Availability::Always,
    },
    NarrativeElement {
        id: "time-traveler",
        label: "Time Traveler",
        prompt_fragment: "a confused time traveler from the past or future",
        availability: Availability::Always,
    },
];

/// Seasonal elements, active only inside their month/day windows.
pub const LIMITED_TIME_ELEMENTS: &[NarrativeElement] = &[
    NarrativeElement {
        id: "cupid-revenge",
        label: "Cupid's Revenge",
        prompt_fragment: "Cupid or Valentine's Day-related romantic mishap",
        availability: Availability::Window(DateWindow::new(2, 1, 2, 14)),
    },
    NarrativeElement {
        id: "easter-bunny",
        label: "Easter Bunny Incident",
        prompt_fragment: "Easter Bunny causing chaos or mischief",
        availability: Availability::Window(DateWindow::new(3, 15, 4, 30)),
    },
    NarrativeElement {
        id: "fireworks-disaster",
        label: "Fireworks Disaster",
        prompt_fragment: "explosive fireworks-related incident",
        availability: Availability::Window(DateWindow::new(7, 1, 7, 14)),
    },
    NarrativeElement {
        id: "halloween-chaos",
        label: "Halloween Chaos",
        prompt_fragment: "spooky Halloween-related supernatural event",
        availability: Availability::Window(DateWindow::new(10, 1, 10, 31)),
    },
    NarrativeElement {
        id: "santa-fault",
        label: "Santa's Fault",
        prompt_fragment: "Santa Claus or Christmas elves causing problems",
        availability: Availability::Window(DateWindow::new(12, 1, 12, 25)),
    },
];

/// All elements requestable on the given month/day: the always-available set
/// plus the seasonal elements whose windows contain the date.
pub fn available_elements(month: u32, day: u32) -> Vec<&'static NarrativeElement> {
    ALWAYS_AVAILABLE_ELEMENTS
        .iter()
        .chain(LIMITED_TIME_ELEMENTS.iter())
        .filter(|element| element.availability.is_active(month, day))
        .collect()
}

/// Look up an element by id, but only if it is available on the given date.
///
/// An id that exists in the catalog is still `None` outside its window; an
/// id valid yesterday may be invalid today.
pub fn find_available(id: &str, month: u32, day: u32) -> Option<&'static NarrativeElement> {
    ALWAYS_AVAILABLE_ELEMENTS
        .iter()
        .chain(LIMITED_TIME_ELEMENTS.iter())
        .find(|element| element.id == id && element.availability.is_active(month, day))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn always_available_set_is_present_year_round() {
        let midwinter = available_elements(1, 10);
        assert_eq!(midwinter.len(), ALWAYS_AVAILABLE_ELEMENTS.len());
        assert!(midwinter.iter().any(|e| e.id == "suspicious-duck"));
    }

    #[test]
    fn halloween_is_active_in_october_only() {
        assert!(find_available("halloween-chaos", 10, 15).is_some());
        assert!(find_available("halloween-chaos", 11, 1).is_none());
    }

    #[test]
    fn easter_window_spans_march_and_april() {
        assert!(find_available("easter-bunny", 3, 20).is_some());
        assert!(find_available("easter-bunny", 4, 10).is_some());
        assert!(find_available("easter-bunny", 3, 1).is_none());
        assert!(find_available("easter-bunny", 5, 1).is_none());
    }

    #[test]
    fn unknown_ids_never_resolve() {
        assert!(find_available("sentient-toaster", 6, 1).is_none());
    }

    #[test]
    fn ids_are_unique_across_both_tables() {
        let mut ids: Vec<&str> = ALWAYS_AVAILABLE_ELEMENTS
            .iter()
            .chain(LIMITED_TIME_ELEMENTS.iter())
            .map(|e| e.id)
            .collect();
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }
}
