// SPDX-License-Identifier: PMPL-1.0-or-later

//! Hand-written lookup table of common UI terms.
//!
//! Embedded at compile time as static `(source, translation)` pairs per
//! language. Lookup is a linear scan, which is fine for the ~35 terms per
//! language: a miss simply leaves the source string in place.
//!
//! ## Adding a language
//!
//! 1. Create a `const XX: &[(&str, &str)]` table below
//! 2. Add `"xx" => Some(XX)` to the match in [`table_for`]
//! 3. Add `"xx"` to [`TABLE_LANGUAGES`]

/// Languages that have a built-in table, in display order.
pub const TABLE_LANGUAGES: &[&str] = &["fr", "de", "es"];

/// Look up an exact source phrase for a language.
///
/// Matching is exact and case-sensitive: `"Dashboard"` hits, `"dashboard"`
/// does not.
///
/// # Examples
///
/// ```
/// use locale_forge::lookup::lookup;
/// assert_eq!(lookup("fr", "Dashboard"), Some("Tableau de bord"));
/// assert_eq!(lookup("fr", "Nonexistent"), None);
/// assert_eq!(lookup("ja", "Dashboard"), None);
/// ```
pub fn lookup(code: &str, text: &str) -> Option<&'static str> {
    let table = table_for(code)?;
    table
        .iter()
        .find(|&&(source, _)| source == text)
        .map(|&(_, translated)| translated)
}

/// Whether a built-in table exists for this language.
pub fn has_table(code: &str) -> bool {
    table_for(code).is_some()
}

/// Number of built-in entries for a language (0 when there is no table).
pub fn entry_count(code: &str) -> usize {
    table_for(code).map(|t| t.len()).unwrap_or(0)
}

fn table_for(code: &str) -> Option<&'static [(&'static str, &'static str)]> {
    match code {
        "fr" => Some(FR),
        "de" => Some(DE),
        "es" => Some(ES),
        _ => None,
    }
}

// ─── French ─────────────────────────────────────────────────────────

const FR: &[(&str, &str)] = &[
    ("Dashboard", "Tableau de bord"),
    ("Home", "Accueil"),
    ("Backlinks", "Backlinks"),
    ("Campaigns", "Campagnes"),
    ("Rankings", "Classements"),
    ("Labs", "Laboratoires"),
    ("API", "API"),
    ("Search", "Recherche"),
    ("Usage", "Utilisation"),
    ("Language", "Langue"),
    ("Keywords", "Mots-clés"),
    ("Sites", "Sites"),
    ("Domains", "Domaines"),
    ("Pages", "Pages"),
    ("Traffic", "Trafic"),
    ("Competition", "Concurrence"),
    ("Analysis", "Analyse"),
    ("Reports", "Rapports"),
    ("Settings", "Paramètres"),
    ("Profile", "Profil"),
    ("Logout", "Déconnexion"),
    ("Login", "Connexion"),
    ("Register", "S'inscrire"),
    ("Save", "Enregistrer"),
    ("Cancel", "Annuler"),
    ("Delete", "Supprimer"),
    ("Edit", "Modifier"),
    ("Create", "Créer"),
    ("Update", "Mettre à jour"),
    ("Submit", "Soumettre"),
    ("Loading", "Chargement"),
    ("Error", "Erreur"),
    ("Success", "Succès"),
    ("Warning", "Avertissement"),
    ("Info", "Information"),
];

// ─── German ─────────────────────────────────────────────────────────

const DE: &[(&str, &str)] = &[
    ("Dashboard", "Dashboard"),
    ("Home", "Startseite"),
    ("Backlinks", "Backlinks"),
    ("Campaigns", "Kampagnen"),
    ("Rankings", "Rankings"),
    ("Labs", "Labs"),
    ("API", "API"),
    ("Search", "Suchen"),
    ("Usage", "Nutzung"),
    ("Language", "Sprache"),
    ("Keywords", "Schlüsselwörter"),
    ("Sites", "Websites"),
    ("Domains", "Domains"),
    ("Pages", "Seiten"),
    ("Traffic", "Verkehr"),
    ("Competition", "Wettbewerb"),
    ("Analysis", "Analyse"),
    ("Reports", "Berichte"),
    ("Settings", "Einstellungen"),
    ("Profile", "Profil"),
    ("Logout", "Abmelden"),
    ("Login", "Anmelden"),
    ("Register", "Registrieren"),
    ("Save", "Speichern"),
    ("Cancel", "Abbrechen"),
    ("Delete", "Löschen"),
    ("Edit", "Bearbeiten"),
    ("Create", "Erstellen"),
    ("Update", "Aktualisieren"),
    ("Submit", "Absenden"),
    ("Loading", "Laden"),
    ("Error", "Fehler"),
    ("Success", "Erfolg"),
    ("Warning", "Warnung"),
    ("Info", "Information"),
];

// ─── Spanish ────────────────────────────────────────────────────────

const ES: &[(&str, &str)] = &[
    ("Dashboard", "Panel de control"),
    ("Home", "Inicio"),
    ("Backlinks", "Enlaces entrantes"),
    ("Campaigns", "Campañas"),
    ("Rankings", "Rankings"),
    ("Labs", "Laboratorios"),
    ("API", "API"),
    ("Search", "Buscar"),
    ("Usage", "Uso"),
    ("Language", "Idioma"),
    ("Keywords", "Palabras clave"),
    ("Sites", "Sitios"),
    ("Domains", "Dominios"),
    ("Pages", "Páginas"),
    ("Traffic", "Tráfico"),
    ("Competition", "Competencia"),
    ("Analysis", "Análisis"),
    ("Reports", "Informes"),
    ("Settings", "Configuración"),
    ("Profile", "Perfil"),
    ("Logout", "Cerrar sesión"),
    ("Login", "Iniciar sesión"),
    ("Register", "Registrarse"),
    ("Save", "Guardar"),
    ("Cancel", "Cancelar"),
    ("Delete", "Eliminar"),
    ("Edit", "Editar"),
    ("Create", "Crear"),
    ("Update", "Actualizar"),
    ("Submit", "Enviar"),
    ("Loading", "Cargando"),
    ("Error", "Error"),
    ("Success", "Éxito"),
    ("Warning", "Advertencia"),
    ("Info", "Información"),
];
