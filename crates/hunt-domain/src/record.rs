//! Parser de registros de contenido: cabecera de metadatos + cuerpo libre.
//!
//! Formato de la cabecera (hasta la primera línea en blanco):
//! - `clave: valor` escalar.
//! - `clave:` abre una lista; las líneas `- item` siguientes son escalares, y
//!   `- clave: valor` abre un objeto que se extiende con `clave: valor`
//!   indentados (un solo nivel de anidamiento).
//!
//! El recorrido usa un cursor etiquetado (`TopLevel` / `InList` / `InObject`)
//! en lugar de variables mutables sueltas: cada línea se interpreta según el
//! estado actual y produce el estado siguiente. Una línea que no encaja con
//! ningún estado es un error fatal de cabecera, nunca un campo descartado en
//! silencio.
use indexmap::IndexMap;

use crate::errors::DomainError;

/// Valor de un campo de cabecera.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderValue {
    Scalar(String),
    List(Vec<String>),
    Objects(Vec<IndexMap<String, String>>),
}

/// Registro parseado: id (derivado del nombre de archivo fuente), cabecera y
/// cuerpo en texto libre sin interpretar.
#[derive(Debug, Clone)]
pub struct Record {
    pub id: String,
    pub header: IndexMap<String, HeaderValue>,
    pub body: String,
}

/// Estado del cursor del parser de cabecera.
enum Cursor {
    TopLevel,
    InList { key: String },
    InObject { key: String },
}

/// Parsea el texto completo de un registro. La cabecera termina en la primera
/// línea en blanco; todo lo posterior es el cuerpo tal cual.
pub fn parse_record(id: &str, text: &str) -> Result<Record, DomainError> {
    let mut header: IndexMap<String, HeaderValue> = IndexMap::new();
    let mut cursor = Cursor::TopLevel;
    let mut body_start: Option<usize> = None;

    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        if raw.trim().is_empty() {
            body_start = Some(idx + 1);
            break;
        }
        let indented = raw.starts_with(' ') || raw.starts_with('\t');
        let line = raw.trim();

        if let Some(item) = line.strip_prefix("- ") {
            // Item de lista: escalar u objeto según contenga `clave: valor`.
            let list_key = match &cursor {
                Cursor::InList { key } | Cursor::InObject { key } => key.clone(),
                Cursor::TopLevel => {
                    return Err(malformed(id, line_no, "item de lista fuera de una clave de lista"));
                }
            };
            match split_key_value(item) {
                Some((k, v)) => {
                    let objects = expect_objects(&mut header, id, line_no, &list_key)?;
                    let mut obj = IndexMap::new();
                    obj.insert(k.to_string(), v.to_string());
                    objects.push(obj);
                    cursor = Cursor::InObject { key: list_key };
                }
                None => {
                    let items = expect_scalars(&mut header, id, line_no, &list_key)?;
                    items.push(item.trim().to_string());
                    cursor = Cursor::InList { key: list_key };
                }
            }
            continue;
        }

        match split_key_value(line) {
            Some((k, v)) if indented => {
                // Continuación de un objeto dentro de una lista.
                match &cursor {
                    Cursor::InObject { key } => {
                        let key = key.clone();
                        let objects = expect_objects(&mut header, id, line_no, &key)?;
                        match objects.last_mut() {
                            Some(obj) => {
                                obj.insert(k.to_string(), v.to_string());
                            }
                            None => return Err(malformed(id, line_no, "objeto de lista sin item previo")),
                        }
                    }
                    _ => {
                        return Err(malformed(id, line_no, "línea indentada fuera de un objeto de lista"));
                    }
                }
            }
            Some((k, v)) => {
                if v.is_empty() {
                    // `clave:` sin valor abre una lista (vacía hasta el primer item).
                    header.insert(k.to_string(), HeaderValue::List(Vec::new()));
                    cursor = Cursor::InList { key: k.to_string() };
                } else {
                    header.insert(k.to_string(), HeaderValue::Scalar(v.to_string()));
                    cursor = Cursor::TopLevel;
                }
            }
            None => {
                return Err(malformed(id, line_no, "línea sin 'clave: valor' ni item de lista"));
            }
        }
    }

    let body = match body_start {
        Some(start) => text.lines().skip(start).collect::<Vec<_>>().join("\n"),
        None => String::new(),
    };

    Ok(Record { id: id.to_string(), header, body })
}

fn malformed(record: &str, line: usize, detail: &str) -> DomainError {
    DomainError::MalformedHeader { record: record.to_string(), line, detail: detail.to_string() }
}

/// Divide `clave: valor` (o `clave:` con valor vacío). La clave no puede
/// contener espacios; así `- nombre: Ana` y un teléfono `+34 600...` no se
/// confunden.
fn split_key_value(line: &str) -> Option<(&str, &str)> {
    let (k, v) = line.split_once(':')?;
    let k = k.trim();
    if k.is_empty() || k.contains(' ') {
        return None;
    }
    Some((k, v.trim()))
}

fn expect_scalars<'a>(header: &'a mut IndexMap<String, HeaderValue>,
                      record: &str,
                      line: usize,
                      key: &str)
                      -> Result<&'a mut Vec<String>, DomainError> {
    match header.get_mut(key) {
        Some(HeaderValue::List(items)) => Ok(items),
        _ => Err(malformed(record, line, "mezcla de items escalares y objetos en la misma lista")),
    }
}

fn expect_objects<'a>(header: &'a mut IndexMap<String, HeaderValue>,
                      record: &str,
                      line: usize,
                      key: &str)
                      -> Result<&'a mut Vec<IndexMap<String, String>>, DomainError> {
    // Una lista recién abierta y aún vacía puede convertirse en lista de objetos.
    let convert = matches!(header.get(key), Some(HeaderValue::List(items)) if items.is_empty());
    if convert {
        header.insert(key.to_string(), HeaderValue::Objects(Vec::new()));
    }
    match header.get_mut(key) {
        Some(HeaderValue::Objects(objects)) => Ok(objects),
        _ => Err(malformed(record, line, "mezcla de items escalares y objetos en la misma lista")),
    }
}

impl Record {
    /// Campo escalar, si existe.
    pub fn scalar(&self, key: &str) -> Option<&str> {
        match self.header.get(key) {
            Some(HeaderValue::Scalar(v)) => Some(v.as_str()),
            _ => None,
        }
    }

    /// Campo escalar requerido.
    pub fn require_scalar(&self, key: &str) -> Result<&str, DomainError> {
        self.scalar(key).ok_or_else(|| DomainError::MissingField { record: self.id.clone(),
                                                                   field: key.to_string() })
    }

    /// Lista de escalares. `Ok(None)` si el campo no existe; error si existe
    /// pero no parseó como lista de escalares (nunca se degrada a vacío).
    pub fn string_list(&self, key: &str) -> Result<Option<&[String]>, DomainError> {
        match self.header.get(key) {
            None => Ok(None),
            Some(HeaderValue::List(items)) => Ok(Some(items)),
            Some(_) => Err(DomainError::InvalidValue { record: self.id.clone(),
                                                       field: key.to_string(),
                                                       detail: "se esperaba una lista de escalares".to_string() }),
        }
    }

    /// Lista de objetos `clave: valor`. Misma política que `string_list`.
    pub fn object_list(&self, key: &str) -> Result<Option<&[IndexMap<String, String>]>, DomainError> {
        match self.header.get(key) {
            None => Ok(None),
            Some(HeaderValue::Objects(objects)) => Ok(Some(objects)),
            // `clave:` sin items: lista vacía válida también como objetos.
            Some(HeaderValue::List(items)) if items.is_empty() => Ok(Some(&[])),
            Some(_) => Err(DomainError::InvalidValue { record: self.id.clone(),
                                                       field: key.to_string(),
                                                       detail: "se esperaba una lista de objetos".to_string() }),
        }
    }

    /// Entero opcional; el valor presente pero no numérico es error fatal.
    pub fn integer(&self, key: &str) -> Result<Option<u32>, DomainError> {
        match self.scalar(key) {
            None => Ok(None),
            Some(v) => v.parse::<u32>().map(Some).map_err(|_| {
                                           DomainError::InvalidValue { record: self.id.clone(),
                                                                       field: key.to_string(),
                                                                       detail: format!("'{v}' no es un entero") }
                                       }),
        }
    }
}
