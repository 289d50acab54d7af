use super::VariantMap;
use crate::variant::Variant;
use crate::VariantError;

impl VariantMap {
    /// Walk a dotted path: map segments match keys (ignoring case), list
    /// segments are decimal indices.
    ///
    /// Automatically handles both `snake_case` and `kebab-case` key names.
    ///
    /// # Examples
    /// ```
    /// use variant_box::VariantMap;
    ///
    /// let map = VariantMap::of(r#"{"server": {"hosts": ["a", "b"], "max_conn": 8}}"#);
    /// assert_eq!(map.get_path("server.hosts.1").map(|v| v.to_string()), Some("b".into()));
    /// assert_eq!(map.get_path("Server.max-conn").map(|v| v.to_int()), Some(8));
    /// assert!(map.get_path("server.port").is_none());
    /// ```
    pub fn get_path(&self, path: &str) -> Option<&Variant> {
        let segs: Vec<&str> = path.split('.').collect();
        let (first, rest) = segs.split_first()?;

        variants(first)
            .iter()
            .filter_map(|seg| self.find(seg))
            .find_map(|child| walk(child, rest))
    }

    /// Strictly typed value at `path`.
    ///
    /// # Examples
    /// ```
    /// use variant_box::VariantMap;
    ///
    /// # fn main() -> Result<(), variant_box::VariantError> {
    /// let map = VariantMap::of(r#"{"server": {"port": 8080, "tags": ["x", "y"]}}"#);
    /// let port: u16 = map.get_as("server.port")?;
    /// let tags: Vec<String> = map.get_as("server.tags")?;
    /// assert_eq!(port, 8080);
    /// assert_eq!(tags, vec!["x", "y"]);
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    /// [`VariantError::PathNotFound`] when nothing lives at `path`, and
    /// [`VariantError::TypeError`] when the value there is a different kind.
    pub fn get_as<T>(&self, path: &str) -> Result<T, VariantError>
    where
        T: TryFrom<Variant, Error = VariantError>,
    {
        let value = self
            .get_path(path)
            .ok_or_else(|| VariantError::path_not_found(path))?;
        T::try_from(value.clone()).map_err(|e| with_path(e, path))
    }

    /// Like [`get_as`](Self::get_as), but a missing path is `Ok(None)`.
    pub fn get_optional<T>(&self, path: &str) -> Result<Option<T>, VariantError>
    where
        T: TryFrom<Variant, Error = VariantError>,
    {
        match self.get_as(path) {
            Ok(value) => Ok(Some(value)),
            Err(VariantError::PathNotFound { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Typed value at `path`, or `default` when missing or mistyped.
    pub fn get_or<T>(&self, path: &str, default: T) -> T
    where
        T: TryFrom<Variant, Error = VariantError>,
    {
        self.get_as(path).unwrap_or(default)
    }

    pub fn has(&self, path: &str) -> bool {
        self.get_path(path).is_some()
    }

    /// Keys of the map at `path`; an empty path lists this map's own keys.
    ///
    /// # Errors
    /// [`VariantError::PathNotFound`] for a missing path, and a
    /// [`VariantError::TypeError`] when the path names something other than a map.
    pub fn get_keys(&self, path: &str) -> Result<Vec<String>, VariantError> {
        if path.trim().is_empty() {
            return Ok(self.to_keys_vec());
        }
        let value = self
            .get_path(path)
            .ok_or_else(|| VariantError::path_not_found(path))?;
        match value {
            Variant::Map(map) => Ok(map.to_keys_vec()),
            other => Err(VariantError::TypeError {
                message: format!("Path '{}' is not a map", path),
                found: other.get_type(),
                hint: Some("Only maps have keys".into()),
                code: Some(306),
            }),
        }
    }
}

fn walk<'a>(node: &'a Variant, segs: &[&str]) -> Option<&'a Variant> {
    let Some((first, rest)) = segs.split_first() else {
        return Some(node);
    };
    variants(first)
        .iter()
        .filter_map(|seg| node.child(seg))
        .find_map(|child| walk(child, rest))
}

// {original, snake, kebab}, de-duplicated, original first
fn variants(seg: &str) -> Vec<String> {
    let mut out = vec![seg.to_string()];

    let snake = seg.replace('-', "_");
    if !out.contains(&snake) {
        out.push(snake);
    }

    let kebab = seg.replace('_', "-");
    if !out.contains(&kebab) {
        out.push(kebab);
    }
    out
}

fn with_path(e: VariantError, path: &str) -> VariantError {
    match e {
        VariantError::TypeError { message, found, hint, code } => VariantError::TypeError {
            message: format!("{} at '{}'", message, path),
            found,
            hint,
            code,
        },
        other => other,
    }
}
