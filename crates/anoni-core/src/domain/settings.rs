use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Configuración de marca del sitio (nombre, portada, colores, pie).
///
/// Sólo la consume la capa de presentación; el motor de consultas la ignora.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteSettings {
  pub site_name: String,
  pub logo_url: String,
  pub hero_title: String,
  pub hero_subtitle: String,
  pub hero_image_url: String,
  pub accent_color: String,
  pub background_color: String,
  pub footer_text: String,
  pub hero_button_text: String,
  pub hero_button_url: String,
  pub hero_button_color: String,
}

impl Default for SiteSettings {
  fn default() -> Self {
    SiteSettings {
      site_name: "Anoni Muzik".to_string(),
      logo_url: String::new(),
      hero_title: "A música sem fronteiras. Totalmente anônima.".to_string(),
      hero_subtitle: "Descubra novos sons, publique suas batidas e baixe o que quiser sem limites.".to_string(),
      hero_image_url: "https://picsum.photos/seed/abstract/1200/400".to_string(),
      accent_color: "#4f46e5".to_string(),
      background_color: "#0f172a".to_string(),
      footer_text: "© Anoni Muzik".to_string(),
      hero_button_text: "Publicar Minha Música".to_string(),
      hero_button_url: "#".to_string(),
      hero_button_color: "#4f46e5".to_string(),
    }
  }
}

impl SiteSettings {
  /// Nombres de campo aceptados por [`SiteSettings::set`].
  pub const FIELDS: [&'static str; 11] = [
    "site_name",
    "logo_url",
    "hero_title",
    "hero_subtitle",
    "hero_image_url",
    "accent_color",
    "background_color",
    "footer_text",
    "hero_button_text",
    "hero_button_url",
    "hero_button_color",
  ];

  /// Los tres colores deben ser hexadecimales `#rgb` o `#rrggbb`.
  pub fn validate(&self) -> Result<(), CoreError> {
    for (name, value) in [
      ("accent_color", &self.accent_color),
      ("background_color", &self.background_color),
      ("hero_button_color", &self.hero_button_color),
    ] {
      if !is_hex_color(value) {
        return Err(CoreError::InvalidInput(format!("{name} must be a hex color, got {value:?}")));
      }
    }
    Ok(())
  }

  /// Cambia un campo por nombre (`site_name`, `siteName` o `site-name`).
  pub fn set(&mut self, field: &str, value: impl Into<String>) -> Result<(), CoreError> {
    let key = normalize_field(field);
    let slot = match key.as_str() {
      "site_name" => &mut self.site_name,
      "logo_url" => &mut self.logo_url,
      "hero_title" => &mut self.hero_title,
      "hero_subtitle" => &mut self.hero_subtitle,
      "hero_image_url" => &mut self.hero_image_url,
      "accent_color" => &mut self.accent_color,
      "background_color" => &mut self.background_color,
      "footer_text" => &mut self.footer_text,
      "hero_button_text" => &mut self.hero_button_text,
      "hero_button_url" => &mut self.hero_button_url,
      "hero_button_color" => &mut self.hero_button_color,
      _ => return Err(CoreError::InvalidInput(format!("unknown settings field: {field}"))),
    };
    *slot = value.into();
    Ok(())
  }
}

fn normalize_field(field: &str) -> String {
  let mut out = String::with_capacity(field.len() + 4);
  for c in field.trim().chars() {
    match c {
      '-' => out.push('_'),
      c if c.is_ascii_uppercase() => {
        out.push('_');
        out.push(c.to_ascii_lowercase());
      }
      c => out.push(c),
    }
  }
  out
}

fn is_hex_color(value: &str) -> bool {
  match value.strip_prefix('#') {
    Some(hex) => matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit()),
    None => false,
  }
}
