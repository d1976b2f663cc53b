use crate::{ProfileSessionCoordinator, SessionError, SessionResult};

use boase_core::{NewTeam, Team, TeamRole};

use std::collections::HashSet;

use uuid::Uuid;

impl ProfileSessionCoordinator {
    /// All teams the current user is not yet a member of.
    ///
    /// Memberships come from the loaded team list, or are fetched again
    /// when that list failed or is still loading.
    pub async fn joinable_teams(&self) -> SessionResult<Vec<Team>> {
        let snapshot = self.snapshot().await;
        let Some(user_id) = snapshot.user_id() else {
            return Err(SessionError::no_identity());
        };

        let settled = !snapshot.teams_loading && snapshot.teams_error.is_none();
        let loaded_teams = snapshot.teams;
        let (teams, own_teams) = tokio::join!(self.store().list_teams(), async {
            if settled {
                Ok(loaded_teams)
            } else {
                log::debug!("Team list not settled, fetching memberships for {}", user_id);
                self.store().list_user_teams(user_id).await
            }
        });

        let member_of: HashSet<Uuid> = own_teams
            .map_err(|e| SessionError::teams_fetch(&e))?
            .iter()
            .map(|team| team.id)
            .collect();
        let teams = teams.map_err(|e| SessionError::teams_fetch(&e))?;

        Ok(teams
            .into_iter()
            .filter(|team| !member_of.contains(&team.id))
            .collect())
    }

    pub async fn join_team(&self, team_id: Uuid) -> SessionResult<()> {
        let ticket = self.begin_mutation().await?;

        if let Err(e) = self
            .store()
            .add_team_membership(ticket.user_id, team_id, TeamRole::Member)
            .await
        {
            let err = SessionError::team_membership(format!("Failed to join team: {}", e.message()));
            log::warn!("{}", err);
            self.finish_mutation(ticket, |_| {}).await;
            return Err(err);
        }

        self.finish_mutation(ticket, |state| {
            state.success_message = Some("Joined team!".to_string());
        })
        .await;
        log::info!("{} joined team {}", ticket.user_id, team_id);

        self.refresh_teams().await;
        Ok(())
    }

    /// Create a team and make the caller its admin.
    pub async fn create_team(&self, name: &str) -> SessionResult<Team> {
        let new_team = NewTeam::from_name(name)?;
        let ticket = self.begin_mutation().await?;

        let team = match self.store().create_team(&new_team).await {
            Ok(team) => team,
            Err(e) => {
                let err = SessionError::team_create(&e);
                log::warn!("{}", err);
                self.finish_mutation(ticket, |_| {}).await;
                return Err(err);
            }
        };

        if let Err(e) = self
            .store()
            .add_team_membership(ticket.user_id, team.id, TeamRole::Admin)
            .await
        {
            let err = SessionError::team_membership(format!(
                "Team created, but failed to add you as a member: {}",
                e.message()
            ));
            log::warn!("{}", err);
            self.finish_mutation(ticket, |_| {}).await;
            self.refresh_teams().await;
            return Err(err);
        }

        let name = team.name.clone();
        self.finish_mutation(ticket, move |state| {
            state.success_message = Some(format!("Team \"{}\" created successfully!", name));
        })
        .await;
        log::info!("{} created team {}", ticket.user_id, team.id);

        self.refresh_teams().await;
        Ok(team)
    }
}
