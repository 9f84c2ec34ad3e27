use bytes::Bytes;

use super::Values;

impl Values {
    /// Create new empty [`Values`].
    ///
    /// This function does not allocate.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of keys.
    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if there is no key.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Returns `true` if the map contains values for given key.
    #[inline]
    pub fn contains_key<K: AsRef<[u8]>>(&self, key: K) -> bool {
        self.map.contains_key(key.as_ref())
    }

    /// Returns the first value associated with the given key.
    ///
    /// If there are no values associated with the key, returns empty slice. To access multiple
    /// values, use [`Values::get_all`].
    ///
    /// ```
    /// use byteuri::Values;
    ///
    /// let mut values = Values::new();
    /// values.add("q", "dogs");
    /// values.add("q", "cats");
    /// assert_eq!(values.get("q"), b"dogs");
    /// assert_eq!(values.get("Q"), b"");
    /// ```
    pub fn get<K: AsRef<[u8]>>(&self, key: K) -> &[u8] {
        match self.map.get(key.as_ref()).and_then(|values| values.first()) {
            Some(value) => &value[..],
            None => &[],
        }
    }

    /// Returns all values associated with the given key, in insertion order.
    #[inline]
    pub fn get_all<K: AsRef<[u8]>>(&self, key: K) -> &[Bytes] {
        self.map.get(key.as_ref()).map(Vec::as_slice).unwrap_or_default()
    }

    /// Set the key to value, replacing any existing values.
    pub fn set(&mut self, key: impl Into<Bytes>, value: impl Into<Bytes>) {
        self.map.insert(key.into(), vec![value.into()]);
    }

    /// Add the value to key, appending to any existing values.
    pub fn add(&mut self, key: impl Into<Bytes>, value: impl Into<Bytes>) {
        self.map.entry(key.into()).or_default().push(value.into());
    }

    /// Delete all values associated with key.
    ///
    /// Returns the removed values, if any.
    pub fn del<K: AsRef<[u8]>>(&mut self, key: K) -> Option<Vec<Bytes>> {
        self.map.remove(key.as_ref())
    }

    /// Returns an iterator over keys and their values, in arbitrary order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&Bytes, &[Bytes])> {
        self.map.iter().map(|(key, values)| (key, values.as_slice()))
    }
}

impl<K: Into<Bytes>, V: Into<Bytes>> FromIterator<(K, V)> for Values {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut values = Values::new();
        for (key, value) in iter {
            values.add(key, value);
        }
        values
    }
}
