//! Prompt construction for the Gemini gateway.
//!
//! The prompt wording follows the BAGRI editorial charter: French copy, one
//! post per (day, network) pair, zero thematic redundancy across days, and
//! network-appropriate tone per platform.

use vitrine_interface::CampaignRequest;

/// Fallback brief when the user submits an empty one.
pub const DEFAULT_BRIEF: &str = "Promotion générale des services de la BAGRI.";

/// Prompt for the competitive watch.
pub fn intelligence_prompt() -> String {
    "En tant qu'expert Marketing pour la BAGRI (Banque Agricole du Niger), effectue une veille concurrentielle stratégique.\n\
     Analyse les institutions suivantes au Niger et dans l'UEMOA : SONIBANK, BOBI, Orabank, Ecobank, Coris Bank, ainsi que les Fintechs (Wave, Orange Money) et services de transfert (Al Izza, Nita).\n\
     Focus particulier : Banques Agricoles de la sous-région.\n\
     Identifie les thématiques fortes (campagnes de récolte, digitalisation, inclusion financière, entrepreneuriat féminin).\n\
     Retourne un JSON structuré."
        .to_string()
}

/// Prompt for bulk campaign drafting.
///
/// Embeds the requested days and networks, the intelligence digest, and the
/// brief, and demands exactly one post per (day, network) pair with a
/// distinct angle per day.
pub fn campaign_prompt(request: &CampaignRequest) -> String {
    let days = request.days().join(", ");
    let networks = request
        .networks()
        .iter()
        .map(|n| n.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    let brief = request
        .brief()
        .as_deref()
        .filter(|b| !b.trim().is_empty())
        .unwrap_or(DEFAULT_BRIEF);

    format!(
        "Tu es le DIRECTEUR DE CRÉATION de la BAGRI (Banque Agricole du Niger).\n\
         MISSION : Créer un calendrier éditorial UNIQUE pour les jours suivants : {days}.\n\
         RÉSEAUX : {networks}.\n\
         \n\
         DIRECTIVES CRUCIALES :\n\
         1. ZÉRO REDONDANCE : Chaque jour doit avoir un angle d'attaque différent.\n\
         2. ADAPTATION RÉSEAU : LinkedIn (Analytique), Facebook (Familial), Instagram (Esthétique).\n\
         3. CONTEXTE : {context}\n\
         4. BRIEF : {brief}\n\
         \n\
         Génère 1 post par jour par réseau demandé. Assure une diversité totale.\n\
         VISUELS : Suggère IMAGE (Africains au Niger), VIDEO ou SPEECH.\n\
         RETOURNE UN JSON STRICT.",
        days = days,
        networks = networks,
        context = request.intelligence_digest(),
        brief = brief,
    )
}

/// Prompt for still-image generation.
pub fn image_prompt(scene: &str) -> String {
    format!(
        "Photographie professionnelle haute définition pour la BAGRI (Banque Agricole du Niger).\n\
         Scène : {scene}.\n\
         DIRECTIVE CRUCIALE : NE GÉNÈRE AUCUN TEXTE, AUCUN LOGO ET AUCUN SYMBOLE DANS L'IMAGE.\n\
         Composition : Laisse délibérément le coin supérieur droit vide et propre pour l'incrustation officielle du logo BAGRI.\n\
         Personnes : Uniquement des Nigériens (Africains de l'Ouest), fiers, rayonnants, en situation réelle au Niger (champs verdoyants, bureaux modernes à Niamey, marchés).\n\
         Couleurs : Respecte la charte BAGRI avec des touches de VERT (#008B45) et ORANGE (#F36F21).\n\
         Style : Authentique, chaleureux, institutionnel.",
        scene = scene,
    )
}

/// Prompt for video-clip generation.
pub fn video_prompt(scene: &str) -> String {
    format!(
        "Vidéo cinématographique pour la BAGRI Niger. Une personne africaine nigérienne souriante. \
         Scène : {scene}. Qualité 1080p. INTERDICTION de générer des logos ou du texte. \
         Composition aérée pour permettre l'ajout de logos en post-production.",
        scene = scene,
    )
}

/// Prompt for text-to-speech rendering.
pub fn speech_prompt(text: &str) -> String {
    format!(
        "Voix radio professionnelle du Niger, ton chaleureux et rassurant : {}",
        text
    )
}

/// Response schema for the competitive watch.
pub fn intelligence_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "institution": {"type": "STRING"},
                "category": {"type": "STRING"},
                "trends": {"type": "ARRAY", "items": {"type": "STRING"}},
                "lastCampaigns": {"type": "STRING"}
            },
            "required": ["institution", "category", "trends", "lastCampaigns"]
        }
    })
}

/// Response schema for campaign drafts.
pub fn drafts_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "day": {"type": "STRING", "description": "Le jour de la semaine concerné"},
                "network": {"type": "STRING"},
                "content": {"type": "STRING"},
                "suggestedVisual": {"type": "STRING", "description": "IMAGE, VIDEO, or SPEECH"}
            },
            "required": ["day", "network", "content", "suggestedVisual"]
        }
    })
}
