//! User-visible strings, kept in one place for editing and translation.

pub const CLUE_HEADING: &str = "Indice :";
pub const MEMORY_HEADING: &str = "Souvenir :";
pub const ALREADY_SEEN: &str = "Déjà vu";
pub const KEEP_CLUE: &str = "Garder l’indice";

pub const REMOVED: &str = "Quelque chose ici a été enlevé.";
pub const NO_NPC_CLUE: &str = "Aucun indice disponible pour ce PNJ à ce moment.";
pub const NO_PLACE_CLUE: &str = "Aucun indice trouvé pour cet endroit.";
pub const NOT_TAKEABLE: &str = "Il n'y a rien à garder ici.";
pub const PENSINE_EMPTY: &str = "La pensine est vide pour le moment.";

pub const SELECT_LOCATION_AND_NPC: &str = "Veuillez sélectionner un lieu et un PNJ.";
pub const SELECT_LOCATION_AND_PLACE: &str = "Veuillez sélectionner un lieu et un endroit à fouiller.";
pub const LOCATION_PLACEHOLDER: &str = "--Sélectionnez un lieu--";
pub const NPC_PLACEHOLDER: &str = "--Sélectionnez un PNJ--";
pub const PLACE_PLACEHOLDER: &str = "--Sélectionnez un endroit--";

pub const PHASE_FLOOR: &str = "La phase ne peut pas être inférieure à 1.";
pub const NOT_STARTED: &str = "La partie n'a pas encore commencé.";
pub const UNKNOWN_CONDITION: &str = "Condition inconnue";
pub const GAME_STARTED: &str = "La partie a commencé.";
pub const GAME_RESET: &str = "La partie a été réinitialisée.";

pub const TOTAL_TIME: &str = "Temps total de la partie:";
pub const PHASE_TIME: &str = "Temps depuis le début de la phase:";
pub const CURRENT_PHASE: &str = "Phase";

pub const CONDITION_ON: &str = "Activée";
pub const CONDITION_OFF: &str = "Désactivée";

pub const IMPORT_OK: &str = "Partie importée.";
pub const IMPORT_FAILED: &str = "Import impossible";
pub const CATALOG_FAILED: &str = "Catalogue illisible";
