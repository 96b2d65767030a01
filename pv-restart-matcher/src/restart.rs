use super::*;

/// Outcome of a completed run.
#[derive(Debug, Default)]
pub struct Report {
    pub candidates: usize,
    pub matched: Vec<Candidate>,
    pub deleted: usize,
}

/// Enumerates candidate pods, matches each in turn and optionally deletes the matches.
///
/// Pods are handled strictly one after the other. A pod that is gone by the
/// time it is deleted counts as deleted. Any other failed delete ends the
/// run; pods deleted before it stay deleted.
#[derive(Debug)]
pub struct Restarter<C> {
    cache: ObjectCache<C>,
    filter: FilterConfig,
    delete: bool,
}

impl<C: ClusterApi> Restarter<C> {
    pub fn new(api: C, filter: FilterConfig) -> Self {
        Self {
            cache: ObjectCache::new(api),
            filter,
            delete: false,
        }
    }

    /// Delete matched pods instead of only reporting them.
    pub fn delete(self, delete: bool) -> Self {
        Self { delete, ..self }
    }

    pub fn cache(&self) -> &ObjectCache<C> {
        &self.cache
    }

    pub async fn run(&self) -> Result<Report, Error> {
        let candidates = list_pods(&self.cache, self.filter.opt_out_annotation()).await?;
        tracing::debug!(candidates = candidates.len(), "Enumerated pods");

        let matcher = Matcher::new(&self.cache, &self.filter);
        let mut report = Report {
            candidates: candidates.len(),
            ..Report::default()
        };

        for candidate in candidates {
            let Candidate {
                namespace, name, ..
            } = &candidate;
            if !matcher.matches(namespace, name, &candidate.claims).await? {
                continue;
            }

            tracing::info!(namespace, pod = name, dry_run = !self.delete, "Pod matched");
            if self.delete {
                match self.cache.api().delete_pod(namespace, name).await {
                    Ok(()) => tracing::info!(namespace, pod = name, "Pod deleted"),
                    Err(err) if err.is_not_found() => {
                        tracing::debug!(namespace, pod = name, "Pod already gone");
                    }
                    Err(source) => {
                        return Err(Error::Delete {
                            namespace: namespace.clone(),
                            name: name.clone(),
                            source,
                        });
                    }
                }
                report.deleted += 1;
            }
            report.matched.push(candidate);
        }

        tracing::info!(
            candidates = report.candidates,
            matched = report.matched.len(),
            deleted = report.deleted,
            "Finished"
        );
        Ok(report)
    }
}
