//! Mock data behind each screen.
//!
//! Every screen owns its own list. Nothing keeps them consistent with each
//! other: the ticket list does not know about the search results, and the
//! baggage screens carry their own copy of the trip.

use jiff::civil::{Date, date};

use crate::i18n::Language;
use crate::model::{SearchPayload, Station, Trip, TripClass};

fn pick(language: Language, fr: &'static str, en: &'static str) -> &'static str {
    match language {
        Language::Fr => fr,
        Language::En => en,
    }
}

// ── Search ──

/// Departures offered for a search. Origin and destination echo the search,
/// falling back to Djibouti → Dire-dawa.
pub fn search_results(payload: &SearchPayload) -> Vec<Trip> {
    let origin = payload
        .origin
        .clone()
        .unwrap_or_else(|| Station::Djibouti.label().to_string());
    let destination = payload
        .destination
        .clone()
        .unwrap_or_else(|| Station::DireDawa.label().to_string());

    [
        (1, "08:00", "20:00", 25, 45, TripClass::Express),
        (2, "14:30", "02:30", 22, 32, TripClass::Standard),
        (3, "22:00", "10:00", 28, 18, TripClass::Couchettes),
    ]
    .into_iter()
    .map(|(id, departure, arrival, price, seats_available, class)| Trip {
        id,
        origin: origin.clone(),
        destination: destination.clone(),
        departure,
        arrival,
        duration: "12h",
        price,
        seats_available,
        class,
    })
    .collect()
}

// ── Home ──

#[derive(Debug, Clone, Copy)]
pub struct PopularRoute {
    pub origin: Station,
    pub destination: Station,
    pub price: u32,
    pub duration: &'static str,
}

pub const POPULAR_ROUTES: [PopularRoute; 3] = [
    PopularRoute {
        origin: Station::Djibouti,
        destination: Station::DireDawa,
        price: 25,
        duration: "12h",
    },
    PopularRoute {
        origin: Station::Djibouti,
        destination: Station::AliSabieh,
        price: 12,
        duration: "3h",
    },
    PopularRoute {
        origin: Station::Holhol,
        destination: Station::Nagad,
        price: 8,
        duration: "2h",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct RecentSearch {
    pub origin: Station,
    pub destination: Station,
    pub date: Date,
}

pub const RECENT_SEARCHES: [RecentSearch; 2] = [
    RecentSearch {
        origin: Station::Djibouti,
        destination: Station::DireDawa,
        date: date(2025, 1, 15),
    },
    RecentSearch {
        origin: Station::AliSabieh,
        destination: Station::Holhol,
        date: date(2025, 1, 18),
    },
];

#[derive(Debug, Clone, Copy)]
pub struct SpecialOffer {
    pub title: &'static str,
    pub discount: &'static str,
}

pub fn special_offers(language: Language) -> [SpecialOffer; 2] {
    [
        SpecialOffer {
            title: pick(language, "Réduction étudiants", "Student discount"),
            discount: "20%",
        },
        SpecialOffer {
            title: pick(language, "Voyage de groupe", "Group travel"),
            discount: "15%",
        },
    ]
}

// ── Tickets ──

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketStatus {
    Confirmed,
    Pending,
    Cancelled,
}

#[derive(Debug, Clone)]
pub struct Ticket {
    pub id: &'static str,
    pub origin: Station,
    pub destination: Station,
    pub date: Date,
    pub time: &'static str,
    pub seat: &'static str,
    pub coach: &'static str,
    pub status: TicketStatus,
    pub price: u32,
    pub passenger: String,
    pub qr_code: &'static str,
}

/// The traveller's tickets, issued to `passenger`.
pub fn tickets(passenger: &str) -> Vec<Ticket> {
    vec![
        Ticket {
            id: "TG001",
            origin: Station::Djibouti,
            destination: Station::DireDawa,
            date: date(2025, 1, 15),
            time: "08:00",
            seat: "A12",
            coach: "2",
            status: TicketStatus::Confirmed,
            price: 25,
            passenger: passenger.to_string(),
            qr_code: "TG001-ABC123-XYZ789",
        },
        Ticket {
            id: "TG002",
            origin: Station::AliSabieh,
            destination: Station::Holhol,
            date: date(2025, 1, 18),
            time: "14:30",
            seat: "B08",
            coach: "1",
            status: TicketStatus::Pending,
            price: 8,
            passenger: passenger.to_string(),
            qr_code: "TG002-DEF456-UVW012",
        },
    ]
}

// ── Notifications ──

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Info,
    Warning,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub id: u32,
    pub kind: NotificationKind,
    pub title: &'static str,
    pub message: &'static str,
    pub time: &'static str,
    pub unread: bool,
}

pub fn notifications(language: Language) -> Vec<Notification> {
    let l = language;
    vec![
        Notification {
            id: 1,
            kind: NotificationKind::Success,
            title: pick(l, "Paiement confirmé", "Payment confirmed"),
            message: pick(
                l,
                "Votre billet pour Djibouti → Dire-dawa a été confirmé",
                "Your ticket for Djibouti → Dire-dawa has been confirmed",
            ),
            time: "2h",
            unread: true,
        },
        Notification {
            id: 2,
            kind: NotificationKind::Info,
            title: pick(l, "Rappel de voyage", "Travel reminder"),
            message: pick(
                l,
                "N'oubliez pas votre voyage demain à 08:00",
                "Don't forget your trip tomorrow at 08:00",
            ),
            time: "5h",
            unread: true,
        },
        Notification {
            id: 3,
            kind: NotificationKind::Warning,
            title: pick(l, "Retard possible", "Possible delay"),
            message: pick(
                l,
                "Le train de 14:30 pourrait avoir 15 min de retard",
                "The 14:30 train might be 15 minutes late",
            ),
            time: pick(l, "1j", "1d"),
            unread: false,
        },
        Notification {
            id: 4,
            kind: NotificationKind::Info,
            title: pick(l, "Nouvelle offre", "New offer"),
            message: pick(
                l,
                "20% de réduction sur les voyages de groupe",
                "20% discount on group travel",
            ),
            time: pick(l, "2j", "2d"),
            unread: false,
        },
    ]
}

// ── Baggage ──

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventStatus {
    Completed,
    InProgress,
    Pending,
}

#[derive(Debug, Clone)]
pub struct BaggageEvent {
    pub time: &'static str,
    pub location: &'static str,
    pub status: EventStatus,
    pub description: &'static str,
}

#[derive(Debug, Clone)]
pub struct BaggageRecord {
    pub id: &'static str,
    pub weight: &'static str,
    pub dimensions: &'static str,
    pub destination: &'static str,
    pub estimated_arrival: &'static str,
    pub current_location: &'static str,
    pub timeline: Vec<BaggageEvent>,
}

/// Tracking number the "track" button fills in.
pub const TRACKING_NUMBER: &str = "EDR-BAG-001";

pub fn baggage_record(language: Language) -> BaggageRecord {
    let l = language;
    let event = |time, location, status, description| BaggageEvent {
        time,
        location,
        status,
        description,
    };
    BaggageRecord {
        id: TRACKING_NUMBER,
        weight: "23 kg",
        dimensions: "55 x 40 x 23 cm",
        destination: "Dire-dawa",
        estimated_arrival: "15:30",
        current_location: "Terminal Djibouti",
        timeline: vec![
            event(
                "08:00",
                pick(l, "Enregistrement - Gare Djibouti", "Check-in - Djibouti station"),
                EventStatus::Completed,
                pick(l, "Bagage enregistré avec succès", "Baggage checked in"),
            ),
            event(
                "08:30",
                pick(l, "Contrôle sécurité", "Security check"),
                EventStatus::Completed,
                pick(l, "Bagage contrôlé et approuvé", "Baggage screened and cleared"),
            ),
            event(
                "09:15",
                pick(l, "Chargement train EDR-001", "Loaded on train EDR-001"),
                EventStatus::Completed,
                pick(
                    l,
                    "Bagage chargé dans le compartiment 3",
                    "Baggage loaded in compartment 3",
                ),
            ),
            event(
                "10:00",
                pick(l, "En transit - Holhol", "In transit - Holhol"),
                EventStatus::InProgress,
                pick(l, "Train en cours de route", "Train on its way"),
            ),
            event(
                "15:30",
                pick(l, "Arrivée Dire-dawa", "Arrival Dire-dawa"),
                EventStatus::Pending,
                pick(
                    l,
                    "Récupération disponible au comptoir bagages",
                    "Collect at the baggage counter",
                ),
            ),
        ],
    }
}

/// What a baggage label scan turns up.
#[derive(Debug, Clone)]
pub struct ScannedBaggage {
    pub baggage_id: &'static str,
    pub owner_name: &'static str,
    pub owner_phone: &'static str,
    pub ticket_id: &'static str,
    pub nationality: &'static str,
    pub origin: &'static str,
    pub destination: &'static str,
    pub date: Date,
    pub train_number: &'static str,
    pub weight: &'static str,
    pub kind: &'static str,
    pub color: &'static str,
    pub brand: &'static str,
    pub registered: &'static str,
}

pub fn scanned_baggage(language: Language) -> ScannedBaggage {
    let l = language;
    ScannedBaggage {
        baggage_id: "BAG-EDR-001234",
        owner_name: "Abdelnassir Haroun",
        owner_phone: "+253 77 12 34 56",
        ticket_id: "TG001",
        nationality: pick(l, "Djiboutien", "Djiboutian"),
        origin: "Djibouti",
        destination: "Dire-dawa",
        date: date(2025, 1, 15),
        train_number: "EDR-101",
        weight: "23kg",
        kind: pick(l, "Valise", "Suitcase"),
        color: pick(l, "Noir", "Black"),
        brand: "Samsonite",
        registered: "2025-01-15 07:30",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn results_echo_search_stations() {
        let payload = SearchPayload {
            origin: Some("Holhol".into()),
            destination: Some("Dawaleh".into()),
            ..SearchPayload::default()
        };
        let trips = search_results(&payload);
        assert_eq!(trips.len(), 3);
        assert!(trips.iter().all(|t| t.origin == "Holhol" && t.destination == "Dawaleh"));
        assert_eq!(trips[0].price, 25);
        assert_eq!(trips[2].class, TripClass::Couchettes);
    }

    #[test]
    fn results_default_to_main_line() {
        let trips = search_results(&SearchPayload::default());
        assert_eq!(trips[1].origin, "Djibouti");
        assert_eq!(trips[1].destination, "Dire-dawa");
    }

    #[test]
    fn tickets_carry_passenger_name() {
        let tickets = tickets("Amina Ali");
        assert_eq!(tickets.len(), 2);
        assert!(tickets.iter().all(|t| t.passenger == "Amina Ali"));
    }

    #[test]
    fn two_unread_notifications_in_both_languages() {
        for language in [Language::Fr, Language::En] {
            let unread = notifications(language).iter().filter(|n| n.unread).count();
            assert_eq!(unread, 2);
        }
    }

    #[test]
    fn baggage_timeline_has_one_leg_in_progress() {
        let record = baggage_record(Language::En);
        assert_eq!(record.timeline.len(), 5);
        let in_progress: Vec<_> = record
            .timeline
            .iter()
            .filter(|e| e.status == EventStatus::InProgress)
            .collect();
        assert_eq!(in_progress.len(), 1);
        assert_eq!(in_progress[0].time, "10:00");
    }
}
