use super::*;

/// Whether `volume` is of at least one of `storage_types`.
///
/// An empty `storage_types` is a caller error. A volume that no longer exists
/// has no type; any other read failure ends the run.
pub async fn has_any_type<C: ClusterApi>(
    cache: &ObjectCache<C>,
    volume: &str,
    storage_types: &BTreeSet<String>,
) -> Result<bool, Error> {
    if storage_types.is_empty() {
        return Err(ConfigError::EmptyTypeFilter.into());
    }

    let query = Query::cluster::<corev1::PersistentVolume>(volume);
    let body = match cache.fetch(&query).await {
        Ok(body) => body,
        Err(err) if err.is_not_found() => {
            tracing::debug!(volume, "Volume not found");
            return Ok(false);
        }
        Err(source) => {
            return Err(Error::ReadVolume {
                volume: volume.to_string(),
                source,
            });
        }
    };

    let pv = model::Volume::decode(&body)?;
    Ok(pv.has_any_type(storage_types.iter().map(String::as_str)))
}
