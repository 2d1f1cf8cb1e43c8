//
//  sentry-client
//  cli/project.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/16.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Project commands
//!
//! Commands that take an organization use `--org`, falling back to the
//! `default_organization` configuration key.

use anyhow::{bail, Result};
use clap::{Args, Subcommand};

use crate::api::projects::{CreateProjectRequest, Project, ProjectListQuery, UpdateProjectRequest};
use crate::config::Config;
use crate::output::{format_bool, format_status, print_field, TableOutput, TableRow};

use super::GlobalOptions;

/// Manage projects
#[derive(Args, Debug)]
pub struct ProjectCommand {
    #[command(subcommand)]
    pub command: ProjectSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ProjectSubcommand {
    /// List projects
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// View project details
    View(ViewArgs),

    /// Create a project
    Create(CreateArgs),

    /// Edit a project
    Edit(EditArgs),

    /// Delete a project
    Delete(DeleteArgs),
}

#[derive(Args, Debug)]
pub struct OrgArg {
    /// Organization slug (defaults to the default_organization setting)
    #[arg(long, short = 'o')]
    pub org: Option<String>,
}

impl OrgArg {
    fn resolve(&self, config: &Config) -> Result<String> {
        match self.org.clone().or_else(|| config.default_organization.clone()) {
            Some(org) => Ok(org),
            None => bail!(
                "No organization given. Pass --org or run 'sentry config set default_organization <slug>'"
            ),
        }
    }
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Cursor from a previous page
    #[arg(long)]
    pub cursor: Option<String>,
}

#[derive(Args, Debug)]
pub struct ViewArgs {
    /// Project slug
    pub slug: String,

    #[command(flatten)]
    pub org: OrgArg,
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Team that will own the project
    pub team: String,

    #[command(flatten)]
    pub org: OrgArg,

    /// Project name
    #[arg(long, short = 'n')]
    pub name: String,

    /// Project slug (derived from the name when omitted)
    #[arg(long, short = 's')]
    pub slug: Option<String>,

    /// SDK platform (e.g., python, javascript-react)
    #[arg(long, short = 'p')]
    pub platform: Option<String>,
}

#[derive(Args, Debug)]
pub struct EditArgs {
    /// Project slug
    pub slug: String,

    #[command(flatten)]
    pub org: OrgArg,

    /// New name
    #[arg(long, short = 'n')]
    pub name: Option<String>,

    /// New slug
    #[arg(long)]
    pub new_slug: Option<String>,

    /// New platform
    #[arg(long, short = 'p')]
    pub platform: Option<String>,

    /// Bookmark or un-bookmark the project
    #[arg(long)]
    pub bookmark: Option<bool>,
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Project slug
    pub slug: String,

    #[command(flatten)]
    pub org: OrgArg,

    /// Skip confirmation
    #[arg(long)]
    pub confirm: bool,
}

impl ProjectCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            ProjectSubcommand::List(args) => self.list(args, global).await,
            ProjectSubcommand::View(args) => self.view(args, global).await,
            ProjectSubcommand::Create(args) => self.create(args, global).await,
            ProjectSubcommand::Edit(args) => self.edit(args, global).await,
            ProjectSubcommand::Delete(args) => self.delete(args, global).await,
        }
    }

    async fn list(&self, args: &ListArgs, global: &GlobalOptions) -> Result<()> {
        let config = global.load_config()?;
        let client = global.client(&config)?;

        let query = ProjectListQuery {
            cursor: args.cursor.clone(),
        };
        let projects = client.list_projects(&query).await?;
        global.writer().write_list(&projects)
    }

    async fn view(&self, args: &ViewArgs, global: &GlobalOptions) -> Result<()> {
        let config = global.load_config()?;
        let org = args.org.resolve(&config)?;
        let client = global.client(&config)?;

        let project = client.get_project(&org, &args.slug).await?;
        global.writer().write(&project)
    }

    async fn create(&self, args: &CreateArgs, global: &GlobalOptions) -> Result<()> {
        let config = global.load_config()?;
        let org = args.org.resolve(&config)?;
        let client = global.client(&config)?;

        let request = CreateProjectRequest {
            name: args.name.clone(),
            slug: args.slug.clone(),
            platform: args.platform.clone(),
        };
        let project = client.create_project(&org, &args.team, &request).await?;

        let writer = global.writer();
        if global.json {
            writer.write(&project)
        } else {
            writer.write_success(&format!("Created project {}/{}", org, project.slug));
            Ok(())
        }
    }

    async fn edit(&self, args: &EditArgs, global: &GlobalOptions) -> Result<()> {
        let request = UpdateProjectRequest {
            name: args.name.clone(),
            slug: args.new_slug.clone(),
            platform: args.platform.clone(),
            is_bookmarked: args.bookmark,
        };
        if request.is_empty() {
            bail!("Nothing to change. Pass at least one of --name, --new-slug, --platform, --bookmark");
        }

        let config = global.load_config()?;
        let org = args.org.resolve(&config)?;
        let client = global.client(&config)?;

        let project = client.update_project(&org, &args.slug, &request).await?;

        let writer = global.writer();
        if global.json {
            writer.write(&project)
        } else {
            writer.write_success(&format!("Updated project {}/{}", org, project.slug));
            Ok(())
        }
    }

    async fn delete(&self, args: &DeleteArgs, global: &GlobalOptions) -> Result<()> {
        if !args.confirm {
            bail!(
                "Deleting a project removes all of its events. Re-run with --confirm to delete '{}'",
                args.slug
            );
        }

        let config = global.load_config()?;
        let org = args.org.resolve(&config)?;
        let client = global.client(&config)?;

        client.delete_project(&org, &args.slug).await?;
        global
            .writer()
            .write_success(&format!("Scheduled project {}/{} for deletion", org, args.slug));
        Ok(())
    }
}

impl TableOutput for Project {
    fn print_table(&self, color: bool) {
        print_field("ID", &self.id, color);
        print_field("Name", &self.name, color);
        print_field("Slug", &self.slug, color);
        if let Some(org) = &self.organization {
            print_field("Organization", &org.slug, color);
        }
        print_field("Platform", self.platform.as_deref().unwrap_or("-"), color);
        if let Some(status) = &self.status {
            print_field("Status", &format_status(status, color), color);
        }
        if let Some(created) = &self.date_created {
            print_field("Created", &created.format("%Y-%m-%d %H:%M UTC").to_string(), color);
        }
        print_field("Bookmarked", &format_bool(self.is_bookmarked), color);
    }
}

impl TableRow for Project {
    fn headers() -> Vec<&'static str> {
        vec!["Organization", "Slug", "Name", "Platform", "Status"]
    }

    fn row(&self, color: bool) -> Vec<String> {
        vec![
            self.organization
                .as_ref()
                .map(|org| org.slug.clone())
                .unwrap_or_default(),
            self.slug.clone(),
            self.name.clone(),
            self.platform.clone().unwrap_or_default(),
            self.status
                .as_deref()
                .map(|status| format_status(status, color))
                .unwrap_or_default(),
        ]
    }
}
