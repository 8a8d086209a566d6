/// Grammar rules announced by the parser as it enters them
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Rule {
    Program,
    VariableDeclarationPart,
    VariableDeclaration,
    IdentifierList,
    Type,
    CompoundStatement,
    Assignment,
    Conditional,
    Repetitive,
    Expression,
    Relation,
    SimpleExpression,
    Term,
    Factor,
}

impl Rule {
    pub fn production(&self) -> &'static str {
        match self {
            Rule::Program => "<programa> ::= program <identificador> ; <bloco> .",
            Rule::VariableDeclarationPart => "<parte_de_declaracoes_de_variaveis> ::= var <declaracao_de_variaveis> { ; <declaracao_de_variaveis> } ;",
            Rule::VariableDeclaration => "<declaracao_de_variaveis> ::= <lista_de_identificadores> : <tipo>",
            Rule::IdentifierList => "<lista_de_identificadores> ::= <identificador> { , <identificador> }",
            Rule::Type => "<tipo> ::= integer | real",
            Rule::CompoundStatement => "<comando_composto> ::= begin <comando> ; { <comando> ; } end",
            Rule::Assignment => "<atribuicao> ::= <variavel> := <expressao>",
            Rule::Conditional => "<comando_condicional> ::= if <expressao> then <comando> [else <comando>]",
            Rule::Repetitive => "<comando_repetitivo> ::= while <expressao> do <comando>",
            Rule::Expression => "<expressao> ::= <expressao_simples> [<relacao> <expressao_simples>]",
            Rule::Relation => "<relacao> ::= = | <> | < | <= | >= | >",
            Rule::SimpleExpression => "<expressao_simples> ::= [+|-] <termo> { (+|-) <termo> }",
            Rule::Term => "<termo> ::= <fator> { (*|/) <fator> }",
            Rule::Factor => "<fator> ::= <variavel> | <numero> | (<expressao>)",
        }
    }

    /// The non-terminal on the left of the production, e.g. `<termo>`
    pub fn name(&self) -> &'static str {
        let production = self.production();
        let end = production.find(' ').unwrap_or(production.len());
        &production[..end]
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TraceMode {
    Stdout,
    Collect,
    Off,
}

enum TraceOutput {
    Stdout,
    Collect(Vec<Rule>),
    Off,
}

pub struct Trace {
    output: TraceOutput,
}

impl Trace {
    pub fn new(mode: TraceMode) -> Self {
        let output = match mode {
            TraceMode::Stdout => TraceOutput::Stdout,
            TraceMode::Collect => TraceOutput::Collect(Vec::new()),
            TraceMode::Off => TraceOutput::Off,
        };
        Trace { output }
    }

    pub fn enter(&mut self, rule: Rule) {
        match &mut self.output {
            TraceOutput::Stdout => println!("{}", rule.production()),
            TraceOutput::Collect(rules) => rules.push(rule),
            TraceOutput::Off => (),
        }
    }

    pub fn rules(&self) -> &[Rule] {
        match &self.output {
            TraceOutput::Collect(rules) => &rules,
            _ => &[],
        }
    }

    pub fn lines(&self) -> Vec<&'static str> {
        self.rules().iter().map(|r| r.production()).collect()
    }
}
