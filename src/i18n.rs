//! Display languages and their string tables.
//!
//! [`Strings`] has one field per key, so a key missing from either table is
//! a compile error rather than a runtime fallback.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Fr,
    En,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown language: {0} (expected fr or en)")]
pub struct ParseLanguageError(pub String);

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Self::Fr => "fr",
            Self::En => "en",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Fr => Self::En,
            Self::En => Self::Fr,
        }
    }

    /// The language's name for itself.
    pub fn native_name(self) -> &'static str {
        match self {
            Self::Fr => "Français",
            Self::En => "English",
        }
    }

    pub fn strings(self) -> &'static Strings {
        match self {
            Self::Fr => &FR,
            Self::En => &EN,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = ParseLanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fr" => Ok(Self::Fr),
            "en" => Ok(Self::En),
            other => Err(ParseLanguageError(other.to_string())),
        }
    }
}

/// Every piece of text the interface shows.
#[derive(Debug)]
pub struct Strings {
    // Brand
    pub brand_name: &'static str,
    pub tagline: &'static str,
    pub loading: &'static str,
    pub welcome_title: &'static str,
    pub welcome_subtitle: &'static str,
    pub get_started: &'static str,

    // Navigation
    pub home: &'static str,
    pub search: &'static str,
    pub my_tickets: &'static str,
    pub notifications: &'static str,
    pub settings: &'static str,
    pub profile: &'static str,
    pub logout: &'static str,
    pub menu: &'static str,
    pub back: &'static str,

    // Key hints
    pub move_hint: &'static str,
    pub change_hint: &'static str,
    pub confirm_hint: &'static str,
    pub language_toggle_hint: &'static str,
    pub date_format_hint: &'static str,
    pub press_any_key: &'static str,

    // Auth
    pub login_title: &'static str,
    pub signup_title: &'static str,
    pub sign_in: &'static str,
    pub create_account: &'static str,
    pub no_account_sign_up: &'static str,
    pub have_account_sign_in: &'static str,
    pub full_name: &'static str,
    pub phone: &'static str,
    pub nationality: &'static str,
    pub choose_nationality: &'static str,
    pub djiboutian: &'static str,
    pub foreigner: &'static str,
    pub id_number: &'static str,
    pub passport_number: &'static str,
    pub email: &'static str,
    pub password: &'static str,
    pub otp_title: &'static str,
    pub otp_subtitle: &'static str,
    pub verify: &'static str,
    pub resend_code: &'static str,
    pub otp_incomplete: &'static str,
    pub otp_resent: &'static str,

    // Validation
    pub fill_required_fields: &'static str,
    pub id_number_required: &'static str,
    pub passport_required: &'static str,
    pub stations_must_differ: &'static str,
    pub invalid_date: &'static str,
    pub select_payment_method: &'static str,
    pub fill_card_fields: &'static str,
    pub save_failed: &'static str,

    // Search
    pub hello: &'static str,
    pub where_to: &'static str,
    pub search_trains: &'static str,
    pub trip_type: &'static str,
    pub one_way: &'static str,
    pub round_trip: &'static str,
    pub from: &'static str,
    pub to: &'static str,
    pub choose_station: &'static str,
    pub departure_date: &'static str,
    pub return_date: &'static str,
    pub passengers: &'static str,
    pub quick_access: &'static str,
    pub popular_routes: &'static str,
    pub recent_searches: &'static str,
    pub special_offers: &'static str,

    // Results
    pub trips_found: fn(usize) -> String,
    pub seats_available: fn(u32) -> String,
    pub select_trip: &'static str,
    pub filters: &'static str,
    pub sort_by: &'static str,
    pub sort_departure: &'static str,
    pub sort_price_low: &'static str,
    pub sort_price_high: &'static str,
    pub class: &'static str,
    pub all_classes: &'static str,

    // Booking steps
    pub step_search: &'static str,
    pub step_seats: &'static str,
    pub step_payment: &'static str,

    // Seats
    pub choose_seats: &'static str,
    pub legend: &'static str,
    pub seat_available: &'static str,
    pub seat_selected: &'static str,
    pub seat_occupied: &'static str,
    pub selected_seats: &'static str,
    pub toggle_seat: &'static str,
    pub seat_unavailable: &'static str,
    pub seats_all_chosen: &'static str,
    pub continue_to_payment: &'static str,
    pub select_more_seats: fn(u32) -> String,

    // Payment
    pub payment: &'static str,
    pub order_summary: &'static str,
    pub route: &'static str,
    pub date: &'static str,
    pub seats: &'static str,
    pub subtotal: &'static str,
    pub service_fee: &'static str,
    pub total: &'static str,
    pub payment_method: &'static str,
    pub waafi: &'static str,
    pub waafi_description: &'static str,
    pub dmoney: &'static str,
    pub dmoney_description: &'static str,
    pub credit_card: &'static str,
    pub pin_code: &'static str,
    pub card_number: &'static str,
    pub expiry_date: &'static str,
    pub card_holder: &'static str,
    pub pay_now: &'static str,
    pub processing_payment: &'static str,
    pub please_wait: &'static str,
    pub payment_successful: &'static str,
    pub redirecting_to_tickets: &'static str,

    // Tickets
    pub confirmed: &'static str,
    pub pending: &'static str,
    pub cancelled: &'static str,
    pub coach: &'static str,
    pub seat: &'static str,
    pub download: &'static str,
    pub share: &'static str,
    pub downloading_ticket: &'static str,
    pub sharing_ticket: &'static str,

    // Notifications
    pub unread_count: fn(usize) -> String,

    // Settings
    pub edit_profile: &'static str,
    pub preferences: &'static str,
    pub language: &'static str,
    pub currency: &'static str,
    pub on: &'static str,
    pub off: &'static str,
    pub payment_methods: &'static str,
    pub connected: &'static str,
    pub not_connected: &'static str,
    pub save: &'static str,

    // Baggage
    pub baggage_tracking: &'static str,
    pub tracking_number: &'static str,
    pub track: &'static str,
    pub baggage_details: &'static str,
    pub weight: &'static str,
    pub dimensions: &'static str,
    pub destination: &'static str,
    pub estimated_arrival: &'static str,
    pub current_location: &'static str,
    pub timeline: &'static str,
    pub enable_notifications: &'static str,
    pub report_problem: &'static str,
    pub baggage_notifications_on: &'static str,
    pub baggage_problem_reported: &'static str,
    pub scan_baggage: &'static str,
    pub customer: &'static str,
    pub agent: &'static str,
    pub mode: &'static str,
    pub scan_instructions: &'static str,
    pub start_scan: &'static str,
    pub scanning: &'static str,
    pub scan_success: &'static str,
    pub owner: &'static str,
    pub trip: &'static str,
    pub ticket: &'static str,
    pub train: &'static str,
    pub baggage_type: &'static str,
    pub registered_at: &'static str,
    pub confirm_baggage: &'static str,
    pub baggage_confirmed_customer: &'static str,
    pub baggage_confirmed_agent: &'static str,
    pub reset: &'static str,
}

fn trips_found_fr(n: usize) -> String {
    if n == 1 {
        "1 voyage trouvé".to_string()
    } else {
        format!("{n} voyages trouvés")
    }
}

fn trips_found_en(n: usize) -> String {
    if n == 1 {
        "1 trip found".to_string()
    } else {
        format!("{n} trips found")
    }
}

fn seats_available_fr(n: u32) -> String {
    format!("{n} places disponibles")
}

fn seats_available_en(n: u32) -> String {
    format!("{n} seats available")
}

fn select_more_seats_fr(n: u32) -> String {
    format!("Sélectionnez {n} siège(s) de plus")
}

fn select_more_seats_en(n: u32) -> String {
    format!("Select {n} more seat(s)")
}

fn unread_count_fr(n: usize) -> String {
    format!("{n} non lue(s)")
}

fn unread_count_en(n: usize) -> String {
    format!("{n} unread")
}

static FR: Strings = Strings {
    brand_name: "Éthio-Djibouti Railways",
    tagline: "Voyagez entre Djibouti et l'Éthiopie",
    loading: "Chargement",
    welcome_title: "Bienvenue sur EDR",
    welcome_subtitle: "Réservez vos billets de train en quelques secondes",
    get_started: "Commencer",

    home: "Accueil",
    search: "Rechercher",
    my_tickets: "Mes Billets",
    notifications: "Notifications",
    settings: "Paramètres",
    profile: "Profil",
    logout: "Déconnexion",
    menu: "Menu",
    back: "retour",

    move_hint: "déplacer",
    change_hint: "changer",
    confirm_hint: "valider",
    language_toggle_hint: "English",
    date_format_hint: "dates AAAA-MM-JJ",
    press_any_key: "Appuyez sur une touche pour continuer",

    login_title: "Se connecter",
    signup_title: "S'inscrire",
    sign_in: "Se connecter",
    create_account: "Créer un compte",
    no_account_sign_up: "Vous n'avez pas de compte ? S'inscrire",
    have_account_sign_in: "Vous avez déjà un compte ? Se connecter",
    full_name: "Nom complet",
    phone: "Téléphone",
    nationality: "Nationalité",
    choose_nationality: "Choisir",
    djiboutian: "Djiboutien",
    foreigner: "Étranger",
    id_number: "Numéro d'identité",
    passport_number: "Numéro de passeport",
    email: "Email",
    password: "Mot de passe",
    otp_title: "Vérification",
    otp_subtitle: "Entrez le code à 6 chiffres envoyé par SMS",
    verify: "Vérifier",
    resend_code: "Renvoyer le code",
    otp_incomplete: "Veuillez entrer le code OTP complet",
    otp_resent: "Code OTP renvoyé",

    fill_required_fields: "Veuillez remplir tous les champs obligatoires",
    id_number_required: "Le numéro d'identité est obligatoire pour les Djiboutiens",
    passport_required: "Le numéro de passeport est obligatoire pour les étrangers",
    stations_must_differ: "Les gares de départ et d'arrivée doivent être différentes",
    invalid_date: "Date invalide (format AAAA-MM-JJ)",
    select_payment_method: "Veuillez choisir un moyen de paiement",
    fill_card_fields: "Veuillez remplir toutes les informations de la carte",
    save_failed: "Impossible d'enregistrer les préférences",

    hello: "Bonjour",
    where_to: "Où allez-vous ?",
    search_trains: "Rechercher",
    trip_type: "Type de voyage",
    one_way: "Aller simple",
    round_trip: "Aller-retour",
    from: "De",
    to: "Vers",
    choose_station: "Choisir une gare",
    departure_date: "Départ",
    return_date: "Retour",
    passengers: "Passagers",
    quick_access: "Accès rapide",
    popular_routes: "Trajets populaires",
    recent_searches: "Recherches récentes",
    special_offers: "Offres spéciales",

    trips_found: trips_found_fr,
    seats_available: seats_available_fr,
    select_trip: "choisir",
    filters: "Filtres",
    sort_by: "Trier par",
    sort_departure: "Heure de départ",
    sort_price_low: "Prix croissant",
    sort_price_high: "Prix décroissant",
    class: "Classe",
    all_classes: "Toutes",

    step_search: "Recherche",
    step_seats: "Sièges",
    step_payment: "Paiement",

    choose_seats: "Choisissez vos sièges",
    legend: "Légende",
    seat_available: "Disponible",
    seat_selected: "Sélectionné",
    seat_occupied: "Occupé",
    selected_seats: "Sièges choisis",
    toggle_seat: "choisir le siège",
    seat_unavailable: "Ce siège n'est pas disponible",
    seats_all_chosen: "Tous les sièges sont déjà choisis",
    continue_to_payment: "Continuer vers le paiement",
    select_more_seats: select_more_seats_fr,

    payment: "Paiement",
    order_summary: "Récapitulatif",
    route: "Trajet",
    date: "Date",
    seats: "Sièges",
    subtotal: "Sous-total",
    service_fee: "Frais de service",
    total: "Total",
    payment_method: "Moyen de paiement",
    waafi: "Waafi Money",
    waafi_description: "Paiement mobile Waafi",
    dmoney: "D-Money",
    dmoney_description: "Paiement mobile D-Money",
    credit_card: "Carte de crédit",
    pin_code: "Code PIN",
    card_number: "Numéro de carte",
    expiry_date: "Date d'expiration",
    card_holder: "Titulaire",
    pay_now: "Payer maintenant",
    processing_payment: "Traitement du paiement",
    please_wait: "Veuillez patienter",
    payment_successful: "Paiement réussi",
    redirecting_to_tickets: "Redirection vers vos billets",

    confirmed: "Confirmé",
    pending: "En attente",
    cancelled: "Annulé",
    coach: "Voiture",
    seat: "Siège",
    download: "télécharger",
    share: "partager",
    downloading_ticket: "Téléchargement du billet",
    sharing_ticket: "Partage du billet",

    unread_count: unread_count_fr,

    edit_profile: "Modifier le profil",
    preferences: "Préférences",
    language: "Langue",
    currency: "Devise",
    on: "Activées",
    off: "Désactivées",
    payment_methods: "Moyens de paiement",
    connected: "Connecté",
    not_connected: "Non connecté",
    save: "Enregistrer",

    baggage_tracking: "Suivi des bagages",
    tracking_number: "Numéro de suivi",
    track: "Suivre",
    baggage_details: "Bagage",
    weight: "Poids",
    dimensions: "Dimensions",
    destination: "Destination",
    estimated_arrival: "Arrivée estimée",
    current_location: "Position actuelle",
    timeline: "Historique",
    enable_notifications: "Activer les notifications",
    report_problem: "Signaler un problème",
    baggage_notifications_on: "Notifications activées pour ce bagage",
    baggage_problem_reported: "Votre signalement a été envoyé",
    scan_baggage: "Scanner un bagage",
    customer: "Client",
    agent: "Agent",
    mode: "Mode",
    scan_instructions: "Placez l'étiquette du bagage devant la caméra",
    start_scan: "Scanner",
    scanning: "Scan en cours",
    scan_success: "Bagage identifié",
    owner: "Propriétaire",
    trip: "Voyage",
    ticket: "Billet",
    train: "Train",
    baggage_type: "Type",
    registered_at: "Enregistré le",
    confirm_baggage: "Confirmer",
    baggage_confirmed_customer: "Bagage confirmé. Bon voyage !",
    baggage_confirmed_agent: "Bagage vérifié et enregistré",
    reset: "recommencer",
};

static EN: Strings = Strings {
    brand_name: "Ethio-Djibouti Railways",
    tagline: "Travel between Djibouti and Ethiopia",
    loading: "Loading",
    welcome_title: "Welcome to EDR",
    welcome_subtitle: "Book your train tickets in seconds",
    get_started: "Get started",

    home: "Home",
    search: "Search",
    my_tickets: "My Tickets",
    notifications: "Notifications",
    settings: "Settings",
    profile: "Profile",
    logout: "Logout",
    menu: "Menu",
    back: "back",

    move_hint: "move",
    change_hint: "change",
    confirm_hint: "confirm",
    language_toggle_hint: "Français",
    date_format_hint: "dates YYYY-MM-DD",
    press_any_key: "Press any key to continue",

    login_title: "Login",
    signup_title: "Sign up",
    sign_in: "Login",
    create_account: "Create Account",
    no_account_sign_up: "Don't have an account? Sign up",
    have_account_sign_in: "Already have an account? Login",
    full_name: "Full name",
    phone: "Phone number",
    nationality: "Nationality",
    choose_nationality: "Choose",
    djiboutian: "Djiboutian",
    foreigner: "Foreigner",
    id_number: "ID number",
    passport_number: "Passport number",
    email: "Email",
    password: "Password",
    otp_title: "Verification",
    otp_subtitle: "Enter the 6-digit code sent by SMS",
    verify: "Verify",
    resend_code: "Resend code",
    otp_incomplete: "Please enter the complete OTP code",
    otp_resent: "OTP code resent",

    fill_required_fields: "Please fill in all required fields",
    id_number_required: "ID number is required for Djiboutian citizens",
    passport_required: "Passport number is required for foreigners",
    stations_must_differ: "Departure and arrival stations must be different",
    invalid_date: "Invalid date (use YYYY-MM-DD)",
    select_payment_method: "Please select a payment method",
    fill_card_fields: "Please fill in all card details",
    save_failed: "Could not save preferences",

    hello: "Hello",
    where_to: "Where are you going?",
    search_trains: "Search",
    trip_type: "Trip type",
    one_way: "One way",
    round_trip: "Round trip",
    from: "From",
    to: "To",
    choose_station: "Choose a station",
    departure_date: "Departure",
    return_date: "Return",
    passengers: "Passengers",
    quick_access: "Quick access",
    popular_routes: "Popular routes",
    recent_searches: "Recent searches",
    special_offers: "Special offers",

    trips_found: trips_found_en,
    seats_available: seats_available_en,
    select_trip: "select",
    filters: "Filters",
    sort_by: "Sort by",
    sort_departure: "Departure time",
    sort_price_low: "Price, low to high",
    sort_price_high: "Price, high to low",
    class: "Class",
    all_classes: "All",

    step_search: "Search",
    step_seats: "Seats",
    step_payment: "Payment",

    choose_seats: "Choose your seats",
    legend: "Legend",
    seat_available: "Available",
    seat_selected: "Selected",
    seat_occupied: "Occupied",
    selected_seats: "Selected seats",
    toggle_seat: "pick seat",
    seat_unavailable: "This seat is not available",
    seats_all_chosen: "Every passenger already has a seat",
    continue_to_payment: "Continue to payment",
    select_more_seats: select_more_seats_en,

    payment: "Payment",
    order_summary: "Order summary",
    route: "Route",
    date: "Date",
    seats: "Seats",
    subtotal: "Subtotal",
    service_fee: "Service fee",
    total: "Total",
    payment_method: "Payment method",
    waafi: "Waafi Money",
    waafi_description: "Waafi mobile payment",
    dmoney: "D-Money",
    dmoney_description: "D-Money mobile payment",
    credit_card: "Credit card",
    pin_code: "PIN code",
    card_number: "Card number",
    expiry_date: "Expiry date",
    card_holder: "Card holder",
    pay_now: "Pay now",
    processing_payment: "Processing payment",
    please_wait: "Please wait",
    payment_successful: "Payment successful",
    redirecting_to_tickets: "Redirecting to your tickets",

    confirmed: "Confirmed",
    pending: "Pending",
    cancelled: "Cancelled",
    coach: "Coach",
    seat: "Seat",
    download: "download",
    share: "share",
    downloading_ticket: "Downloading ticket",
    sharing_ticket: "Sharing ticket",

    unread_count: unread_count_en,

    edit_profile: "Edit profile",
    preferences: "Preferences",
    language: "Language",
    currency: "Currency",
    on: "On",
    off: "Off",
    payment_methods: "Payment methods",
    connected: "Connected",
    not_connected: "Not connected",
    save: "Save",

    baggage_tracking: "Baggage tracking",
    tracking_number: "Tracking number",
    track: "Track",
    baggage_details: "Baggage",
    weight: "Weight",
    dimensions: "Dimensions",
    destination: "Destination",
    estimated_arrival: "Estimated arrival",
    current_location: "Current location",
    timeline: "Timeline",
    enable_notifications: "Enable notifications",
    report_problem: "Report a problem",
    baggage_notifications_on: "Notifications enabled for this bag",
    baggage_problem_reported: "Your report has been sent",
    scan_baggage: "Scan baggage",
    customer: "Customer",
    agent: "Agent",
    mode: "Mode",
    scan_instructions: "Hold the baggage tag in front of the camera",
    start_scan: "Scan",
    scanning: "Scanning",
    scan_success: "Baggage identified",
    owner: "Owner",
    trip: "Trip",
    ticket: "Ticket",
    train: "Train",
    baggage_type: "Type",
    registered_at: "Registered",
    confirm_baggage: "Confirm",
    baggage_confirmed_customer: "Baggage confirmed. Have a good trip!",
    baggage_confirmed_agent: "Baggage checked and registered",
    reset: "start over",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for language in [Language::Fr, Language::En] {
            assert_eq!(language.code().parse::<Language>().unwrap(), language);
        }
        assert!("de".parse::<Language>().is_err());
        assert!("FR".parse::<Language>().is_err());
    }

    #[test]
    fn french_is_default() {
        assert_eq!(Language::default(), Language::Fr);
        assert_eq!(Language::Fr.toggled(), Language::En);
    }

    #[test]
    fn tables_differ_per_language() {
        assert_eq!(Language::Fr.strings().my_tickets, "Mes Billets");
        assert_eq!(Language::En.strings().my_tickets, "My Tickets");
    }

    #[test]
    fn counted_strings() {
        let en = Language::En.strings();
        assert_eq!((en.trips_found)(1), "1 trip found");
        assert_eq!((en.trips_found)(3), "3 trips found");
        assert_eq!((Language::Fr.strings().trips_found)(3), "3 voyages trouvés");
        assert_eq!((en.select_more_seats)(2), "Select 2 more seat(s)");
    }

    #[test]
    fn serializes_as_lowercase_code() {
        assert_eq!(serde_json::to_string(&Language::En).unwrap(), "\"en\"");
    }
}
