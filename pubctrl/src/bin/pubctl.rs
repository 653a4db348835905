use chrono::NaiveDate;
use clap::{
    Args,
    Parser,
    Subcommand,
};
use pubclient::{
    ApiClient,
    AuthorService,
    BookService,
    MagazineService,
    PublicationService,
    DEFAULT_BASE_URL,
};
use pubcore::{
    author::AuthorRequest,
    book::BookForm,
    listing::{
        ListQuery,
        SortDirection,
    },
    magazine::{
        AuthorIds,
        MagazineForm,
    },
    publication::PublicationRequest,
    resource::{
        Form,
        FormOf,
        ResourceBackend,
    },
};
use pubctrl::{
    confirm::{
        ConfirmChoice,
        DEFAULT_CONFIRM_MESSAGE,
    },
    report::LogReporter,
    view::{
        CrudView,
        Paging,
    },
};
use std::{
    fmt::Display,
    io::{
        stdin,
        stdout,
        Write,
    },
    sync::Arc,
};

#[derive(Debug, Parser)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[clap(
        long,
        value_name = "PUBLISHER_API_BASE_URL",
        env = "PUBLISHER_API_BASE_URL",
        default_value = DEFAULT_BASE_URL,
    )]
    api_base_url: String,
    #[clap(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(arg_required_else_help = true)]
    Author {
        #[command(subcommand)]
        cmd: AuthorCmd,
    },
    #[command(arg_required_else_help = true)]
    Book {
        #[command(subcommand)]
        cmd: BookCmd,
    },
    #[command(arg_required_else_help = true)]
    Magazine {
        #[command(subcommand)]
        cmd: MagazineCmd,
    },
    #[command(arg_required_else_help = true)]
    Publication {
        #[command(subcommand)]
        cmd: PublicationCmd,
    },
}

#[derive(Debug, Args)]
struct ListArgs {
    #[clap(long)]
    page: Option<u32>,
    #[clap(long)]
    size: Option<u32>,
    #[clap(long, value_name = "ASC|DESC")]
    sort: Option<SortDirection>,
    #[clap(long)]
    sort_by: Option<String>,
    #[clap(long)]
    title: Option<String>,
}

impl ListArgs {
    fn to_query(&self) -> ListQuery {
        ListQuery {
            page: self.page,
            page_size: self.size,
            sort: self.sort,
            sort_by: self.sort_by.clone(),
            title: self.title.clone(),
        }
    }

    fn to_paging(&self) -> Paging {
        let paging = Paging::default();
        Paging {
            page: self.page.unwrap_or(paging.page),
            page_size: self.size.unwrap_or(paging.page_size),
            sort: self.sort.unwrap_or(paging.sort),
            ..paging
        }
    }
}

#[derive(Debug, Args)]
struct AuthorFields {
    #[clap(long)]
    name: Option<String>,
    #[clap(long, value_name = "YYYY-MM-DD")]
    birth_date: Option<NaiveDate>,
    #[clap(long)]
    nationality: Option<String>,
}

#[derive(Debug, Args)]
struct BookFields {
    #[clap(long)]
    title: Option<String>,
    #[clap(long, value_name = "YYYY-MM-DD")]
    publication_date: Option<NaiveDate>,
    #[clap(long)]
    isbn: Option<String>,
    #[clap(long)]
    author_id: Option<i64>,
}

#[derive(Debug, Args)]
struct MagazineFields {
    #[clap(long)]
    title: Option<String>,
    #[clap(long, value_name = "YYYY-MM-DD")]
    publication_date: Option<NaiveDate>,
    #[clap(long)]
    issue_number: Option<i64>,
    /// Comma separated author identifiers, e.g. "1, 2, 3".
    #[clap(long, value_name = "IDS")]
    author_ids: Option<String>,
}

#[derive(Debug, Args)]
struct PublicationFields {
    #[clap(long)]
    title: Option<String>,
    #[clap(long, value_name = "YYYY-MM-DD")]
    publication_date: Option<NaiveDate>,
}

#[derive(Debug, Subcommand)]
enum AuthorCmd {
    List {
        #[command(flatten)]
        list: ListArgs,
    },
    #[command(arg_required_else_help = true)]
    Get {
        id: i64,
    },
    #[command(arg_required_else_help = true)]
    Create {
        #[command(flatten)]
        fields: AuthorFields,
    },
    #[command(arg_required_else_help = true)]
    Update {
        id: i64,
        #[command(flatten)]
        fields: AuthorFields,
    },
    #[command(arg_required_else_help = true)]
    Delete {
        id: i64,
        #[clap(long, short = 'y', action)]
        yes: bool,
    },
}

#[derive(Debug, Subcommand)]
enum BookCmd {
    List {
        #[command(flatten)]
        list: ListArgs,
    },
    #[command(arg_required_else_help = true)]
    ByAuthor {
        author_id: i64,
        #[command(flatten)]
        list: ListArgs,
    },
    #[command(arg_required_else_help = true)]
    Get {
        id: i64,
    },
    #[command(arg_required_else_help = true)]
    Create {
        #[command(flatten)]
        fields: BookFields,
    },
    #[command(arg_required_else_help = true)]
    Update {
        id: i64,
        #[command(flatten)]
        fields: BookFields,
    },
    #[command(arg_required_else_help = true)]
    Delete {
        id: i64,
        #[clap(long, short = 'y', action)]
        yes: bool,
    },
}

#[derive(Debug, Subcommand)]
enum MagazineCmd {
    List {
        #[command(flatten)]
        list: ListArgs,
    },
    #[command(arg_required_else_help = true)]
    Get {
        id: i64,
    },
    #[command(arg_required_else_help = true)]
    Create {
        #[command(flatten)]
        fields: MagazineFields,
    },
    #[command(arg_required_else_help = true)]
    Update {
        id: i64,
        #[command(flatten)]
        fields: MagazineFields,
    },
    #[command(arg_required_else_help = true)]
    Delete {
        id: i64,
        #[clap(long, short = 'y', action)]
        yes: bool,
    },
}

#[derive(Debug, Subcommand)]
enum PublicationCmd {
    List {
        #[command(flatten)]
        list: ListArgs,
    },
    #[command(arg_required_else_help = true)]
    Get {
        id: i64,
    },
    #[command(arg_required_else_help = true)]
    Create {
        #[command(flatten)]
        fields: PublicationFields,
    },
    #[command(arg_required_else_help = true)]
    Update {
        id: i64,
        #[command(flatten)]
        fields: PublicationFields,
    },
    #[command(arg_required_else_help = true)]
    Delete {
        id: i64,
        #[clap(long, short = 'y', action)]
        yes: bool,
    },
}

/// Copy the fields given on the command line over a dialog form, leaving
/// the others as they were.
trait Overlay<F> {
    fn overlay(self, form: &mut F);
}

impl Overlay<AuthorRequest> for AuthorFields {
    fn overlay(self, form: &mut AuthorRequest) {
        if let Some(name) = self.name {
            form.name = name;
        }
        if let Some(birth_date) = self.birth_date {
            form.birth_date = birth_date.to_string();
        }
        if let Some(nationality) = self.nationality {
            form.nationality = nationality;
        }
    }
}

impl Overlay<BookForm> for BookFields {
    fn overlay(self, form: &mut BookForm) {
        if let Some(title) = self.title {
            form.title = title;
        }
        if let Some(publication_date) = self.publication_date {
            form.publication_date = publication_date.to_string();
        }
        if let Some(isbn) = self.isbn {
            form.isbn = isbn;
        }
        if let Some(author_id) = self.author_id {
            form.author_id = author_id.into();
        }
    }
}

impl Overlay<MagazineForm> for MagazineFields {
    fn overlay(self, form: &mut MagazineForm) {
        if let Some(title) = self.title {
            form.title = title;
        }
        if let Some(publication_date) = self.publication_date {
            form.publication_date = publication_date.to_string();
        }
        if let Some(issue_number) = self.issue_number {
            form.issue_number = issue_number.into();
        }
        if let Some(author_ids) = self.author_ids {
            form.author_ids = AuthorIds::Text(author_ids);
        }
    }
}

impl Overlay<PublicationRequest> for PublicationFields {
    fn overlay(self, form: &mut PublicationRequest) {
        if let Some(title) = self.title {
            form.title = title;
        }
        if let Some(publication_date) = self.publication_date {
            form.publication_date = publication_date.to_string();
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Cli::parse();
    stderrlog::new()
        .module(module_path!())
        .module("pubctrl")
        .module("pubclient")
        .verbosity((args.verbose as usize) + 1)
        .timestamp(stderrlog::Timestamp::Second)
        .init()?;

    let client = ApiClient::new(&args.api_base_url)?
        .with_reporter(Arc::new(LogReporter));
    log::debug!("using api at {}", client.base_url());

    match args.command {
        Commands::Author { cmd } => {
            parse_author(client, cmd).await?;
        },
        Commands::Book { cmd } => {
            parse_book(client, cmd).await?;
        },
        Commands::Magazine { cmd } => {
            parse_magazine(client, cmd).await?;
        },
        Commands::Publication { cmd } => {
            parse_publication(client, cmd).await?;
        },
    }

    Ok(())
}

async fn parse_author(
    client: ApiClient,
    arg: AuthorCmd,
) -> anyhow::Result<()> {
    let view = CrudView::new(AuthorService::new(client));
    match arg {
        AuthorCmd::List { list } => run_list(view.with_query(list.to_query())).await,
        AuthorCmd::Get { id } => run_get(view, id).await,
        AuthorCmd::Create { fields } => run_create(view, fields).await,
        AuthorCmd::Update { id, fields } => run_update(view, id, fields).await,
        AuthorCmd::Delete { id, yes } => run_delete(view, id, yes).await,
    }
}

async fn parse_book(
    client: ApiClient,
    arg: BookCmd,
) -> anyhow::Result<()> {
    let view = CrudView::new(BookService::new(client));
    match arg {
        BookCmd::List { list } => run_list(view.with_query(list.to_query())).await,
        BookCmd::ByAuthor { author_id, list } => {
            let listing = view.backend()
                .list_by_author(author_id, &list.to_query())
                .await?;
            for book in listing.items.iter() {
                println!("{book}");
            }
            println!("{} of {} records", listing.items.len(), listing.total);
            Ok(())
        },
        BookCmd::Get { id } => run_get(view, id).await,
        BookCmd::Create { fields } => run_create(view, fields).await,
        BookCmd::Update { id, fields } => run_update(view, id, fields).await,
        BookCmd::Delete { id, yes } => run_delete(view, id, yes).await,
    }
}

async fn parse_magazine(
    client: ApiClient,
    arg: MagazineCmd,
) -> anyhow::Result<()> {
    let service = MagazineService::new(client);
    match arg {
        MagazineCmd::List { list } => {
            let view = CrudView::paged(service, list.to_paging())
                .with_query(list.to_query());
            run_list(view).await
        },
        MagazineCmd::Get { id } => run_get(CrudView::new(service), id).await,
        MagazineCmd::Create { fields } => {
            run_create(CrudView::paged(service, Paging::default()), fields).await
        },
        MagazineCmd::Update { id, fields } => {
            run_update(CrudView::paged(service, Paging::default()), id, fields).await
        },
        MagazineCmd::Delete { id, yes } => {
            run_delete(CrudView::paged(service, Paging::default()), id, yes).await
        },
    }
}

async fn parse_publication(
    client: ApiClient,
    arg: PublicationCmd,
) -> anyhow::Result<()> {
    let view = CrudView::new(PublicationService::new(client));
    match arg {
        PublicationCmd::List { list } => run_list(view.with_query(list.to_query())).await,
        PublicationCmd::Get { id } => run_get(view, id).await,
        PublicationCmd::Create { fields } => run_create(view, fields).await,
        PublicationCmd::Update { id, fields } => run_update(view, id, fields).await,
        PublicationCmd::Delete { id, yes } => run_delete(view, id, yes).await,
    }
}

async fn run_list<B>(mut view: CrudView<B>) -> anyhow::Result<()>
where
    B: ResourceBackend,
    B::Entity: Display,
{
    view.load().await?;
    for item in view.items.iter() {
        println!("{item}");
    }
    match &view.paging {
        Some(paging) => println!(
            "page {} ({} per page, sorted {}): {} records in total",
            paging.page,
            paging.page_size,
            paging.sort,
            view.total_records,
        ),
        None => println!("{} of {} records", view.items.len(), view.total_records),
    }
    Ok(())
}

async fn run_get<B: ResourceBackend>(
    view: CrudView<B>,
    id: i64,
) -> anyhow::Result<()> {
    let entity = view.backend().get(id).await?;
    println!("{}", serde_json::to_string_pretty(&entity)?);
    Ok(())
}

async fn run_create<B, O>(
    mut view: CrudView<B>,
    fields: O,
) -> anyhow::Result<()>
where
    B: ResourceBackend,
    B::Entity: Display,
    O: Overlay<FormOf<B>>,
{
    view.open_new();
    fields.overlay(&mut view.form);
    submit(&mut view, "created").await
}

async fn run_update<B, O>(
    mut view: CrudView<B>,
    id: i64,
    fields: O,
) -> anyhow::Result<()>
where
    B: ResourceBackend,
    B::Entity: Display,
    O: Overlay<FormOf<B>>,
{
    let entity = view.backend().get(id).await?;
    view.open_edit(entity);
    fields.overlay(&mut view.form);
    submit(&mut view, "updated").await
}

async fn submit<B>(
    view: &mut CrudView<B>,
    verb: &str,
) -> anyhow::Result<()>
where
    B: ResourceBackend,
    B::Entity: Display,
{
    if !view.form.is_complete() {
        anyhow::bail!("missing required fields: {}", view.missing_fields().join(", "));
    }
    let saved = view.save().await?;
    println!("{verb} {saved}");
    Ok(())
}

async fn run_delete<B>(
    mut view: CrudView<B>,
    id: i64,
    yes: bool,
) -> anyhow::Result<()>
where
    B: ResourceBackend,
    B::Entity: Display,
{
    let entity = view.backend().get(id).await?;
    let label = entity.to_string();
    view.confirm_delete(entity);
    let choice = if yes {
        ConfirmChoice::Accept
    } else {
        println!("{label}");
        ask(DEFAULT_CONFIRM_MESSAGE)?
    };
    view.resolve_delete(choice).await?;
    match choice {
        ConfirmChoice::Accept => println!("deleted {label}"),
        ConfirmChoice::Reject => println!("cancelled"),
    }
    Ok(())
}

fn ask(message: &str) -> anyhow::Result<ConfirmChoice> {
    print!("{message} [y/N] ");
    stdout().flush()?;
    let mut answer = String::new();
    stdin().read_line(&mut answer)?;
    Ok(ConfirmChoice::from_answer(&answer))
}
